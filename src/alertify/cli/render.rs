use alertify::api::{CmdMessage, MessageLevel};
use alertify::error::AlertifyError;
use alertify::index::DisplayReminder;
use colored::Colorize;

const BANNER_RULE: &str = "==============================";
const BANNER_TITLE: &str = "          Reminders           ";

pub fn render_header() -> String {
    format!("{}\n{}\n{}\n", BANNER_RULE, BANNER_TITLE, BANNER_RULE)
        .magenta()
        .to_string()
}

/// `NN. text (Due: D, Priority: P, Status: S)` per reminder, red when overdue.
pub fn render_reminder_list(reminders: &[DisplayReminder]) -> String {
    if reminders.is_empty() {
        return format!("{}\n", "No reminders found.".yellow());
    }

    let mut output = String::new();
    for dr in reminders {
        let line = format!(
            "{:02}. {} (Due: {}, Priority: {}, Status: {})",
            dr.sequence, dr.reminder.text, dr.reminder.due, dr.reminder.priority, dr.reminder.status
        );
        let line = if dr.overdue { line.red() } else { line.yellow() };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn error_message(err: &AlertifyError) -> CmdMessage {
    CmdMessage::error(err.to_string())
}

pub fn print_error(err: &AlertifyError) {
    print_messages(&[error_message(err)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertify::index::ReminderRef;
    use alertify::model::{Priority, Reminder, Status};

    fn display(text: &str, sequence: usize, due: &str, overdue: bool) -> DisplayReminder {
        DisplayReminder {
            reminder: Reminder::new(text.to_string(), due.parse().unwrap(), Priority::High),
            sequence,
            overdue,
        }
    }

    #[test]
    fn renders_numbered_lines() {
        colored::control::set_override(false);
        let out = render_reminder_list(&[
            display("Pay rent", 1, "2024-01-01", true),
            display("Renew passport", 12, "N/A", false),
        ]);
        assert_eq!(
            out,
            "01. Pay rent (Due: 2024-01-01, Priority: High, Status: Pending)\n\
             12. Renew passport (Due: N/A, Priority: High, Status: Pending)\n"
        );
    }

    #[test]
    fn renders_empty_list() {
        colored::control::set_override(false);
        assert_eq!(render_reminder_list(&[]), "No reminders found.\n");
    }

    #[test]
    fn header_is_a_banner() {
        colored::control::set_override(false);
        let header = render_header();
        assert_eq!(header.lines().count(), 3);
        assert!(header.contains("Reminders"));
    }

    #[test]
    fn errors_become_error_level_messages() {
        let message = error_message(&AlertifyError::NotFound(ReminderRef::BySequence(4)));
        assert_eq!(message.level, MessageLevel::Error);
        assert_eq!(message.content, "No reminder found with serial number 4");
    }

    #[test]
    fn shows_status_text_as_stored() {
        colored::control::set_override(false);
        let mut dr = display("Ship it", 3, "N/A", true);
        dr.reminder.status = Status::Overdue;
        assert!(render_reminder_list(&[dr]).contains("Status: Overdue"));
    }
}
