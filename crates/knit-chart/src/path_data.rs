//! Outline import from SVG path data.
//!
//! Lets any closed shape drawn in an SVG editor be charted, not just the
//! built-in garment pieces. svgtypes normalizes relative, shorthand and arc
//! commands down to absolute moves, lines, quadratics and cubics.

use log::warn;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::error::PathDataError;
use crate::outline::{Outline, OutlineBuilder, CLOSE_TOLERANCE};

impl Outline {
    /// Parse the first subpath of an SVG `d` attribute.
    ///
    /// Any later subpaths are ignored. A subpath without
    /// `Z` is still treated as closed when it ends on its start point;
    /// otherwise the outline is left open.
    pub fn from_path_data(d: &str) -> Result<Outline, PathDataError> {
        let mut builder: Option<OutlineBuilder> = None;
        let mut closed = false;

        for segment in SimplifyingPathParser::from(d) {
            let segment = segment?;
            let Some(b) = builder.take() else {
                match segment {
                    SimplePathSegment::MoveTo { x, y } => {
                        builder = Some(OutlineBuilder::move_to(x, y));
                        continue;
                    }
                    _ => return Err(PathDataError::Empty),
                }
            };
            let next = match segment {
                SimplePathSegment::MoveTo { .. } => {
                    warn!("path data has more than one subpath, using the first");
                    builder = Some(b);
                    break;
                }
                SimplePathSegment::ClosePath => {
                    closed = true;
                    builder = Some(b);
                    break;
                }
                SimplePathSegment::LineTo { x, y } => b.line_to(x, y),
                SimplePathSegment::Quadratic { x1, y1, x, y } => b.quadratic_to(x1, y1, x, y),
                SimplePathSegment::CurveTo { x1, y1, x2, y2, x, y } => b.cubic_to(x1, y1, x2, y2, x, y),
            };
            builder = Some(next);
        }

        let Some(builder) = builder else {
            return Err(PathDataError::Empty);
        };
        let outline = if closed || builder.current().approx_eq(builder.start(), CLOSE_TOLERANCE) {
            builder.close()
        } else {
            builder.finish_open()
        };
        if outline.segments().is_empty() {
            return Err(PathDataError::Empty);
        }
        Ok(outline)
    }
}

/// Pull the `d` attribute of the first `<path>` element out of an SVG document.
pub fn first_path_data(svg: &str) -> Result<String, PathDataError> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"path" => {
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == b"d" {
                        return Ok(String::from_utf8_lossy(&attr.value).into_owned());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Err(PathDataError::NoPathElement)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{StitchSize, Symbol};
    use crate::rasterize::rasterize;

    #[test]
    fn parses_closed_rectangle() {
        let outline = Outline::from_path_data("M 0 0 H 50 V 20 H 0 Z").unwrap();
        assert!(outline.is_closed());
        assert_eq!(outline.segments().len(), 4);
        let bbox = outline.bounding_box().unwrap();
        assert_eq!((bbox.width(), bbox.height()), (50.0, 20.0));
    }

    #[test]
    fn relative_commands_are_resolved() {
        let outline = Outline::from_path_data("m 10 10 l 20 0 l 0 20 l -20 0 z").unwrap();
        let bbox = outline.bounding_box().unwrap();
        assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (10.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn curves_survive_import() {
        let outline = Outline::from_path_data("M 0 0 C 10 0 10 10 0 10 Q -5 5 0 0 Z").unwrap();
        assert!(outline.is_closed());
        assert_eq!(outline.segments().len(), 2);
    }

    #[test]
    fn output_path_data_reads_back_the_same() {
        let original = OutlineBuilder::move_to(0.0, 0.0)
            .cubic_by(10.0, 0.0, 10.0, 10.0, 0.0, 10.0)
            .line_by(-5.0, 0.0)
            .close();
        let parsed = Outline::from_path_data(&original.to_path_data()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn only_the_first_subpath_is_used() {
        let outline = Outline::from_path_data("M 0 0 H 10 V 10 Z M 100 100 H 200 V 200 Z").unwrap();
        assert_eq!(outline.bounding_box().unwrap().max_x, 10.0);
    }

    #[test]
    fn unterminated_path_is_open() {
        let outline = Outline::from_path_data("M 0 0 L 10 0 L 10 10").unwrap();
        assert!(!outline.is_closed());
        let chart = rasterize(&outline, StitchSize::new(1.0, 1.0));
        assert!(chart.is_all(Symbol::None));
    }

    #[test]
    fn path_ending_on_its_start_counts_as_closed() {
        let outline = Outline::from_path_data("M 0 0 L 10 0 L 10 10 L 0 0").unwrap();
        assert!(outline.is_closed());
        assert_eq!(outline.segments().len(), 3);
    }

    #[test]
    fn bad_path_data_is_an_error() {
        assert!(matches!(Outline::from_path_data(""), Err(PathDataError::Empty)));
        assert!(matches!(Outline::from_path_data("M 0 0"), Err(PathDataError::Empty)));
        assert!(Outline::from_path_data("M 0 0 L foo").is_err());
    }

    #[test]
    fn finds_first_path_in_document() {
        let svg = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
  <g><rect width="5" height="5"/></g>
  <path id="a" d="M 0 0 H 5 V 5 Z"/>
  <path id="b" d="M 1 1 H 2 V 2 Z"/>
</svg>"#;
        assert_eq!(first_path_data(svg).unwrap(), "M 0 0 H 5 V 5 Z");
    }

    #[test]
    fn document_without_path_is_an_error() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="5" height="5"/></svg>"#;
        assert!(matches!(first_path_data(svg), Err(PathDataError::NoPathElement)));
    }
}
