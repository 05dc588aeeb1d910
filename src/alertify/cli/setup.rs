use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alertify", bin_name = "alertify", version)]
#[command(about = "Keep track of reminders from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reminders file [default: reminders.json]
    #[arg(short, long, global = true, env = "ALERTIFY_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Backup file [default: <file>_backup.json next to the reminders file]
    #[arg(long, global = true, env = "ALERTIFY_BACKUP_FILE", value_name = "PATH")]
    pub backup_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new reminder
    #[command(alias = "a")]
    Add {
        /// Reminder text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// Priority (Low, Medium, High)
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List reminders, archiving completed ones
    #[command(alias = "ls")]
    List {
        /// Only look: keep completed reminders in the file
        #[arg(long)]
        peek: bool,
    },

    /// Update the due date and/or priority of a reminder
    #[command(alias = "u")]
    Update {
        /// Serial number or ID of the reminder
        reference: String,

        /// New due date (YYYY-MM-DD, or N/A to clear)
        #[arg(short, long)]
        due: Option<String>,

        /// New priority (Low, Medium, High)
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Set the status of a reminder (Pending, Completed, Overdue)
    #[command(name = "status", visible_alias = "set-status", alias = "s")]
    Status {
        /// Serial number or ID of the reminder
        reference: String,

        /// New status
        status: String,
    },

    /// Remove a reminder
    #[command(alias = "rm")]
    Remove {
        /// Serial number or ID of the reminder
        reference: String,
    },

    /// Reset the reminders file to an empty list
    #[command(alias = "x")]
    Reset,

    /// Move the reminders file to the backup file
    #[command(alias = "b")]
    Backup,

    /// Move the backup file back to the reminders file
    #[command(alias = "R")]
    Restore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["alertify"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::try_parse_from([
            "alertify", "add", "Pay", "rent", "-d", "2024-01-01", "-p", "High",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                text,
                due,
                priority,
            }) => {
                assert_eq!(text.join(" "), "Pay rent");
                assert_eq!(due.as_deref(), Some("2024-01-01"));
                assert_eq!(priority.as_deref(), Some("High"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn set_status_alias() {
        let cli = Cli::try_parse_from(["alertify", "set-status", "2", "Completed"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Status { ref reference, ref status })
                if reference == "2" && status == "Completed"
        ));
    }

    #[test]
    fn global_file_flag() {
        let cli = Cli::try_parse_from(["alertify", "ls", "--file", "/tmp/r.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/r.json")));
        assert!(matches!(cli.command, Some(Commands::List { peek: false })));
    }
}
