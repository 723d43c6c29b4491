//! Classification of single URL path segments.
//!
//! Recorded URLs contain concrete identifiers (`/users/42`, `/orders/3f2c...`). The
//! [`SegmentClassifier`] decides whether a segment looks like such an identifier so the
//! templater can replace it with a named placeholder.

/// Kind of identifier a path segment looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Canonical `8-4-4-4-12` hexadecimal UUID
    Uuid,
    /// One or more ASCII digits
    Integer,
    /// Digits with a single decimal point (`12.5`)
    Float,
    /// A literal path component
    None,
}

/// Result of classifying one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Detected kind
    pub kind: SegmentKind,
    /// The raw segment text
    pub value: String,
}

impl Classification {
    /// Whether the segment should be replaced by a path parameter.
    pub fn is_dynamic(&self) -> bool {
        self.kind != SegmentKind::None
    }
}

/// Pure classifier over single path segments.
pub struct SegmentClassifier;

impl SegmentClassifier {
    /// Classifies a segment.
    ///
    /// Checks run in a fixed order: UUID, then integer, then float. The float shape is a
    /// superset of the integer shape, so an all-digit segment is always reported as
    /// [`SegmentKind::Integer`].
    ///
    /// # Example
    ///
    /// ```
    /// use har_to_openapi::segment::{SegmentClassifier, SegmentKind};
    ///
    /// assert_eq!(SegmentClassifier::classify("42").kind, SegmentKind::Integer);
    /// assert_eq!(SegmentClassifier::classify("users").kind, SegmentKind::None);
    /// ```
    pub fn classify(segment: &str) -> Classification {
        let kind = if Self::is_uuid(segment) {
            SegmentKind::Uuid
        } else if Self::is_integer(segment) {
            SegmentKind::Integer
        } else if Self::is_float(segment) {
            SegmentKind::Float
        } else {
            SegmentKind::None
        };

        Classification {
            kind,
            value: segment.to_string(),
        }
    }

    fn is_uuid(segment: &str) -> bool {
        const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

        let groups: Vec<&str> = segment.split('-').collect();
        groups.len() == GROUPS.len()
            && groups
                .iter()
                .zip(GROUPS.iter())
                .all(|(group, len)| {
                    group.len() == *len && group.chars().all(|c| c.is_ascii_hexdigit())
                })
    }

    fn is_integer(segment: &str) -> bool {
        !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
    }

    fn is_float(segment: &str) -> bool {
        match segment.split_once('.') {
            Some((whole, fraction)) => Self::is_integer(whole) && Self::is_integer(fraction),
            None => Self::is_integer(segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uuid() {
        let result = SegmentClassifier::classify("123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(result.kind, SegmentKind::Uuid);
        assert_eq!(result.value, "123e4567-e89b-12d3-a456-426614174000");
    }

    #[test]
    fn test_classify_uppercase_uuid() {
        let result = SegmentClassifier::classify("123E4567-E89B-12D3-A456-426614174000");
        assert_eq!(result.kind, SegmentKind::Uuid);
    }

    #[test]
    fn test_classify_malformed_uuid() {
        // Wrong group length
        assert_eq!(
            SegmentClassifier::classify("123e4567-e89b-12d3-a456-42661417400").kind,
            SegmentKind::None
        );
        // Non-hex character
        assert_eq!(
            SegmentClassifier::classify("123e4567-e89b-12d3-a456-42661417400z").kind,
            SegmentKind::None
        );
    }

    #[test]
    fn test_classify_integer() {
        assert_eq!(SegmentClassifier::classify("42").kind, SegmentKind::Integer);
        assert_eq!(SegmentClassifier::classify("0").kind, SegmentKind::Integer);
        assert_eq!(
            SegmentClassifier::classify("00012345678901234567890").kind,
            SegmentKind::Integer
        );
    }

    #[test]
    fn test_classify_float() {
        assert_eq!(SegmentClassifier::classify("3.14").kind, SegmentKind::Float);
        assert_eq!(SegmentClassifier::classify("10.0").kind, SegmentKind::Float);
    }

    #[test]
    fn test_classify_literals() {
        for segment in ["users", "", "v1", "1.2.3", ".5", "5.", "-1", "12a", "api-v2"] {
            assert_eq!(
                SegmentClassifier::classify(segment).kind,
                SegmentKind::None,
                "segment {:?} should be literal",
                segment
            );
        }
    }

    #[test]
    fn test_is_dynamic() {
        assert!(SegmentClassifier::classify("7").is_dynamic());
        assert!(!SegmentClassifier::classify("orders").is_dynamic());
    }
}
