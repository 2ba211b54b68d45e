use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::join::JoinReport;

/// Describes references the join could not resolve. Never fails: broken
/// references only affect what the catalog can show, not whether it works.
pub fn run(report: &JoinReport) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("All references resolve."));
        return Ok(result.with_report(report.clone()));
    }

    for product in &report.dangling_categories {
        result.add_message(CmdMessage::warning(format!(
            "Product {} ({}) points at missing category {}",
            product.id, product.name, product.category_id
        )));
    }
    for category in &report.dangling_owners {
        result.add_message(CmdMessage::warning(format!(
            "Category {} ({}) points at missing user {}",
            category.id, category.title, category.owner_id
        )));
    }

    Ok(result.with_report(report.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::join::join_store;
    use crate::store::memory::fixtures;

    #[test]
    fn clean_catalog_reports_success() {
        let (_, report) = join_store(&fixtures::banana());
        let result = run(&report).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn warns_once_per_dangling_reference() {
        let (_, report) = join_store(&fixtures::market());
        let result = run(&report).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Warning));
        assert!(result.messages[0].content.contains("missing category 99"));
        assert!(result.messages[1].content.contains("missing user 42"));
    }
}
