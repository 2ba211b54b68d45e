use colored::{ColoredString, Colorize};
use prodcat::api::{Chip, CmdMessage, MessageLevel};
use prodcat::model::{JoinedItem, Sex};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";
const MAX_COLUMN_WIDTH: usize = 32;
const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_chips(chips: &[Chip]) {
    for chip in chips {
        let key = chip.key.as_deref().unwrap_or("-");
        let line = format!("{:>4}  {}", key, chip.label);
        if chip.active {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_json(rows: &[JoinedItem]) -> prodcat::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// One text cell per column, before colouring.
fn cells(item: &JoinedItem) -> [String; 4] {
    [
        item.product.id.to_string(),
        item.product.name.clone(),
        item.category.as_ref().map(|c| c.label()).unwrap_or_default(),
        item.user_name().unwrap_or_default().to_string(),
    ]
}

fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width()).min(MAX_COLUMN_WIDTH);
        }
    }
    widths
}

fn user_style(item: &JoinedItem, text: &str) -> ColoredString {
    match item.user.as_ref().map(|u| u.sex) {
        Some(Sex::Male) => text.blue(),
        Some(Sex::Female) => text.red(),
        None => text.normal(),
    }
}

pub(super) fn print_table(rows: &[JoinedItem]) {
    let texts: Vec<[String; 4]> = rows.iter().map(cells).collect();
    let widths = column_widths(&texts);

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect();
    println!("{}", header.join(COLUMN_GAP).bold());

    for (item, text) in rows.iter().zip(&texts) {
        let [id, product, category, user] = text;
        println!(
            "{}{}{}{}{}{}{}",
            pad_to_width(id, widths[0]).bold(),
            COLUMN_GAP,
            pad_to_width(product, widths[1]),
            COLUMN_GAP,
            pad_to_width(category, widths[2]),
            COLUMN_GAP,
            user_style(item, &truncate_to_width(user, widths[3])),
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
