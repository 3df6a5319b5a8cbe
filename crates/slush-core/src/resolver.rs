//! Pure project stage resolution from related-data counts.
//!
//! Persistence lives in `slush-db` (`refresh_project_stage`), which only ever
//! writes the resolved stage when it ranks ahead of the stored one. Keeping
//! the rule itself free of I/O makes it testable over the full input space.

use crate::enums::ProjectStage;

/// Resolve the lifecycle stage implied by a project's related data.
///
/// Any letter means the author is drafting. Otherwise a conversation beyond
/// the opening message means they are searching for a publisher. Otherwise
/// the project is new.
#[must_use]
pub const fn resolve_stage(message_count: i64, letter_count: i64) -> ProjectStage {
    if letter_count > 0 {
        ProjectStage::Drafting
    } else if message_count > 1 {
        ProjectStage::PublisherSearch
    } else {
        ProjectStage::New
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::resolve_stage;
    use crate::enums::ProjectStage;

    #[rstest]
    #[case(0, 0, ProjectStage::New)]
    #[case(1, 0, ProjectStage::New)]
    #[case(2, 0, ProjectStage::PublisherSearch)]
    #[case(50, 0, ProjectStage::PublisherSearch)]
    #[case(0, 1, ProjectStage::Drafting)]
    #[case(1, 1, ProjectStage::Drafting)]
    #[case(2, 1, ProjectStage::Drafting)]
    #[case(0, 3, ProjectStage::Drafting)]
    #[case(100, 7, ProjectStage::Drafting)]
    fn resolves_stage_from_counts(
        #[case] message_count: i64,
        #[case] letter_count: i64,
        #[case] expected: ProjectStage,
    ) {
        assert_eq!(resolve_stage(message_count, letter_count), expected);
    }

    #[test]
    fn letters_dominate_messages() {
        // A letter forces drafting no matter how long the transcript is.
        for message_count in 0..10 {
            assert_eq!(resolve_stage(message_count, 1), ProjectStage::Drafting);
        }
    }

    #[test]
    fn single_message_is_still_new() {
        assert_eq!(resolve_stage(1, 0), ProjectStage::New);
    }

    #[test]
    fn resolver_is_pure() {
        let first = resolve_stage(3, 0);
        let second = resolve_stage(3, 0);
        assert_eq!(first, second);
    }
}
