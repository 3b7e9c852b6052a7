use crate::models::meeting::Meeting;
use crate::models::timeline::{Milestone, MilestoneStatus};
use serde::{Deserialize, Serialize};

pub const ALL_TAGS: &str = "all";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_tag() -> String {
    ALL_TAGS.to_string()
}

impl Default for MeetingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tag: default_tag(),
        }
    }
}

impl MeetingQuery {
    pub fn matches(&self, meeting: &Meeting) -> bool {
        matches_search(meeting, &self.search) && matches_tag(meeting, &self.tag)
    }
}

/// Case-insensitive substring match on title or summary. Empty query matches.
pub fn matches_search(meeting: &Meeting, query: &str) -> bool {
    let needle = query.to_lowercase();
    meeting.title.to_lowercase().contains(&needle) || meeting.summary.to_lowercase().contains(&needle)
}

/// Exact tag equality; `"all"` matches everything.
pub fn matches_tag(meeting: &Meeting, tag: &str) -> bool {
    tag == ALL_TAGS || meeting.tags().iter().any(|t| t == tag)
}

pub fn filter_meetings<'a>(meetings: &'a [Meeting], query: &MeetingQuery) -> Vec<&'a Meeting> {
    meetings.iter().filter(|m| query.matches(m)).collect()
}

/// Distinct tags across all meetings, in first-seen order.
pub fn distinct_tags(meetings: &[Meeting]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in meetings.iter().flat_map(|m| m.tags()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Milestones with the given status, insertion order kept. `None` = all.
pub fn filter_milestones(milestones: &[Milestone], status: Option<MilestoneStatus>) -> Vec<&Milestone> {
    milestones
        .iter()
        .filter(|m| status.map_or(true, |wanted| m.status == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meeting::MeetingLog;
    use crate::models::timeline::Timeline;

    fn query(search: &str, tag: &str) -> MeetingQuery {
        MeetingQuery {
            search: search.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn planning_tag_returns_exactly_tagged_meetings() {
        let log = MeetingLog::default();
        let ids: Vec<&str> = filter_meetings(&log.meetings, &query("", "planning"))
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_summary() {
        let log = MeetingLog::default();

        let by_title = filter_meetings(&log.meetings, &query("DESIGN review", ALL_TAGS));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "2");

        let by_summary = filter_meetings(&log.meetings, &query("wireframes", ALL_TAGS));
        assert_eq!(by_summary[0].id, "2");

        assert_eq!(filter_meetings(&log.meetings, &MeetingQuery::default()).len(), 3);
    }

    #[test]
    fn search_and_tag_combine_with_and() {
        let log = MeetingLog::default();
        assert!(filter_meetings(&log.meetings, &query("kickoff", "sprint")).is_empty());
        assert_eq!(filter_meetings(&log.meetings, &query("sprint", "planning")).len(), 1);
    }

    #[test]
    fn tag_match_is_exact() {
        let log = MeetingLog::default();
        assert!(filter_meetings(&log.meetings, &query("", "Planning")).is_empty());
        assert!(filter_meetings(&log.meetings, &query("", "plan")).is_empty());
    }

    #[test]
    fn tags_are_distinct_in_first_seen_order() {
        let log = MeetingLog::default();
        assert_eq!(
            distinct_tags(&log.meetings),
            vec!["planning", "kickoff", "design", "review", "sprint", "development"]
        );
    }

    #[test]
    fn milestone_status_filter() {
        let timeline = Timeline::default();
        let upcoming = filter_milestones(&timeline.milestones, Some(MilestoneStatus::Upcoming));
        let ids: Vec<u32> = upcoming.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
        assert_eq!(filter_milestones(&timeline.milestones, None).len(), 6);
    }
}
