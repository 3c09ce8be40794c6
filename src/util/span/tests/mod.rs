//! Span 单元测试
//!
//! 测试源位置跟踪的 Position、Span 和 LineIndex

use crate::util::span::{LineIndex, Position, Span};

mod position_tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(1, 5);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_display() {
        let pos = Position::with_offset(10, 20, 300);
        assert_eq!(format!("{}", pos), "10:20");
    }
}

mod span_tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(
            Position::with_offset(1, 1, 0),
            Position::with_offset(1, 6, 5),
        );
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Position::new(1, 2), Position::new(3, 4));
        assert_eq!(span.to_string(), "[1:2 - 3:4]");
    }
}

mod line_index_tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("(a b c)");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), Position::with_offset(1, 1, 0));
        assert_eq!(index.position(3), Position::with_offset(1, 4, 3));
    }

    #[test]
    fn test_multi_line() {
        let index = LineIndex::new("(a\n  b\n)");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.position(2), Position::with_offset(1, 3, 2));
        assert_eq!(index.position(3), Position::with_offset(2, 1, 3));
        assert_eq!(index.position(5), Position::with_offset(2, 3, 5));
        assert_eq!(index.position(7), Position::with_offset(3, 1, 7));
    }

    #[test]
    fn test_offset_at_end_of_text() {
        let text = "(a)\n";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text.len()), Position::with_offset(2, 1, 4));
    }

    #[test]
    fn test_span_from_range() {
        let index = LineIndex::new("(first\nsecond)");
        let span = index.span(7, 13);
        assert_eq!(span.start, Position::with_offset(2, 1, 7));
        assert_eq!(span.end, Position::with_offset(2, 7, 13));
        assert_eq!(span.len(), 6);
    }
}
