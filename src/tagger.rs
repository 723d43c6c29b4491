use crate::openapi_builder::Paths;
use indexmap::IndexMap;
use log::debug;

/// Tag used when a path has nothing after the most common segment
pub const FALLBACK_TAG: &str = "Misc";

/// Groups operations by the resource that follows the most common path segment.
///
/// For paths `/api/users/{id}` and `/api/orders/{id}`, `api` is the most common segment,
/// so the operations are tagged `users` and `orders`.
pub struct TagAssigner;

impl TagAssigner {
    /// The most frequent non-empty segment over all path templates.
    ///
    /// Ties go to the segment counted first. Returns `None` when there are no segments.
    pub fn most_common_segment(paths: &Paths) -> Option<String> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for path in paths.keys() {
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                *counts.entry(segment).or_insert(0) += 1;
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (segment, count) in counts {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((segment, count));
            }
        }
        best.map(|(segment, _)| segment.to_string())
    }

    /// Tag for a single path given the most common segment
    pub fn tag_for(path: &str, common_segment: Option<&str>) -> String {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        common_segment
            .and_then(|common| segments.iter().position(|s| *s == common))
            .and_then(|index| segments.get(index + 1))
            .map(|s| s.to_string())
            .unwrap_or_else(|| FALLBACK_TAG.to_string())
    }

    /// Replace the tags of every operation with the single tag of its path.
    pub fn assign(mut paths: Paths) -> Paths {
        let common = Self::most_common_segment(&paths);
        debug!("Most common path segment: {:?}", common);

        for (path, item) in paths.iter_mut() {
            let tag = Self::tag_for(path, common.as_deref());
            for operation in item.values_mut() {
                operation.tags = vec![tag.clone()];
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi_builder::{Operation, PathItem};

    fn paths_of(templates: &[&str]) -> Paths {
        let mut paths = Paths::new();
        for template in templates {
            let mut item = PathItem::new();
            item.insert("get".to_string(), Operation::new(None));
            item.insert("post".to_string(), Operation::new(None));
            paths.insert(template.to_string(), item);
        }
        paths
    }

    #[test]
    fn test_most_common_segment() {
        let paths = paths_of(&["/api/users/{id}", "/api/orders/{id}"]);
        assert_eq!(TagAssigner::most_common_segment(&paths), Some("api".to_string()));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let paths = paths_of(&["/orders", "/users"]);
        assert_eq!(TagAssigner::most_common_segment(&paths), Some("orders".to_string()));
    }

    #[test]
    fn test_no_paths() {
        assert_eq!(TagAssigner::most_common_segment(&Paths::new()), None);
        assert!(TagAssigner::assign(Paths::new()).is_empty());
    }

    #[test]
    fn test_assign_uses_next_segment() {
        let tagged = TagAssigner::assign(paths_of(&["/api/users/{id}", "/api/orders/{id}"]));

        assert_eq!(tagged["/api/users/{id}"]["get"].tags, vec!["users".to_string()]);
        assert_eq!(tagged["/api/users/{id}"]["post"].tags, vec!["users".to_string()]);
        assert_eq!(tagged["/api/orders/{id}"]["get"].tags, vec!["orders".to_string()]);
    }

    #[test]
    fn test_fallback_tag() {
        // Common segment is last
        assert_eq!(TagAssigner::tag_for("/status/api", Some("api")), FALLBACK_TAG);
        // Common segment absent
        assert_eq!(TagAssigner::tag_for("/health", Some("api")), FALLBACK_TAG);
        assert_eq!(TagAssigner::tag_for("/", None), FALLBACK_TAG);
    }

    #[test]
    fn test_assign_replaces_existing_tags() {
        let mut paths = paths_of(&["/api/users"]);
        paths["/api/users"]["get"].tags = vec!["old".to_string()];

        let tagged = TagAssigner::assign(paths);
        assert_eq!(tagged["/api/users"]["get"].tags, vec!["users".to_string()]);
    }
}
