use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::opener::Opener;
use crate::subject::{Bookmark, SubjectResolver};

#[derive(Parser, Debug)]
#[command(
    name = "tu",
    version,
    about = "Open the folder of the subject",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subject to open (case-insensitive); opens the root folder when omitted.
    /// Words after the first are ignored.
    #[arg(trailing_var_arg = true)]
    pub subject: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all subjects
    #[command(visible_alias = "l")]
    List {
        #[arg(hide = true, trailing_var_arg = true)]
        ignored: Vec<String>,
    },

    /// Create a new subject
    #[command(visible_alias = "c")]
    Create {
        #[arg(hide = true, trailing_var_arg = true)]
        ignored: Vec<String>,
    },

    /// Open the vowi page of the subject
    #[command(visible_alias = "v")]
    Vowi {
        #[arg(trailing_var_arg = true)]
        subject: Vec<String>,
    },

    /// Open the tuwel page of the subject
    Tuwel {
        #[arg(trailing_var_arg = true)]
        subject: Vec<String>,
    },

    /// Open the tiss page of the subject
    Tiss {
        #[arg(trailing_var_arg = true)]
        subject: Vec<String>,
    },
}

/// Executes one parsed command line. User-facing text goes to `out`; only a
/// broken root folder or a failed launch is returned as an error.
pub fn run(
    cli: Cli,
    resolver: &SubjectResolver,
    opener: &dyn Opener,
    out: &mut impl Write,
) -> Result<()> {
    match cli.command {
        None => open_subject(first(&cli.subject), resolver, opener, out),
        Some(Commands::List { .. }) => list_subjects(resolver, out),
        Some(Commands::Create { .. }) => {
            writeln!(out, "Not yet implemented")?;
            Ok(())
        }
        Some(Commands::Vowi { subject }) => {
            open_bookmark(Bookmark::Vowi, first(&subject), resolver, opener, out)
        }
        Some(Commands::Tuwel { subject }) => {
            open_bookmark(Bookmark::Tuwel, first(&subject), resolver, opener, out)
        }
        Some(Commands::Tiss { subject }) => {
            open_bookmark(Bookmark::Tiss, first(&subject), resolver, opener, out)
        }
    }
}

/// Only the first word names a subject; the rest is ignored.
fn first(words: &[String]) -> Option<&str> {
    words.first().map(String::as_str)
}

fn open_subject(
    subject: Option<&str>,
    resolver: &SubjectResolver,
    opener: &dyn Opener,
    out: &mut impl Write,
) -> Result<()> {
    let subject = match subject.filter(|s| !s.is_empty()) {
        Some(subject) => subject,
        None => return opener.open(resolver.root()),
    };

    match find_subject(subject, resolver, out)? {
        Some(dir) => opener.open(&dir),
        None => Ok(()),
    }
}

fn list_subjects(resolver: &SubjectResolver, out: &mut impl Write) -> Result<()> {
    let subjects = resolver.list()?;
    writeln!(
        out,
        "Found {} subjects:\n{}",
        subjects.len(),
        subjects.join("\n")
    )?;
    Ok(())
}

fn open_bookmark(
    bookmark: Bookmark,
    subject: Option<&str>,
    resolver: &SubjectResolver,
    opener: &dyn Opener,
    out: &mut impl Write,
) -> Result<()> {
    let subject = subject.unwrap_or_default();
    let Some(dir) = find_subject(subject, resolver, out)? else {
        return Ok(());
    };

    match bookmark.locate(&dir) {
        Some(file) => opener.open(&file),
        None => {
            writeln!(
                out,
                "Even though the subject {} exists, there is no {} file in the folder.",
                subject,
                bookmark.file_name()
            )?;
            Ok(())
        }
    }
}

/// Resolves `subject`, telling the user when it does not exist.
fn find_subject(
    subject: &str,
    resolver: &SubjectResolver,
    out: &mut impl Write,
) -> Result<Option<PathBuf>> {
    match resolver.resolve(subject) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.is_not_found() => {
            report_unknown(subject, resolver, out)?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn report_unknown(subject: &str, resolver: &SubjectResolver, out: &mut impl Write) -> Result<()> {
    if subject.is_empty() {
        writeln!(out, "You need to provide a subject.")?;
        writeln!(out, "Type `tu help` to see all options.")?;
        return Ok(());
    }

    writeln!(out, "The subject {} does not exist.", subject)?;
    if let Some(candidate) = resolver.suggest(subject)? {
        writeln!(out, "Did you mean `{}`?", candidate)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subject() {
        let cli = parse(&["tu"]);
        assert!(cli.subject.is_empty());
        assert_eq!(cli.command, None);
    }

    #[test]
    fn positional_subject() {
        let cli = parse(&["tu", "math"]);
        assert_eq!(cli.subject, vec!["math"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn extra_words_are_accepted() {
        let cli = parse(&["tu", "Math", "extra"]);
        assert_eq!(first(&cli.subject), Some("Math"));
        assert_eq!(cli.command, None);

        let cli = parse(&["tu", "vowi", "Math", "extra"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Vowi { ref subject }) if first(subject) == Some("Math")
        ));

        assert!(matches!(parse(&["tu", "list", "x"]).command, Some(Commands::List { .. })));
        assert!(matches!(parse(&["tu", "c", "Algebra"]).command, Some(Commands::Create { .. })));
    }

    #[test]
    fn subcommands_and_aliases() {
        assert!(matches!(parse(&["tu", "list"]).command, Some(Commands::List { .. })));
        assert!(matches!(parse(&["tu", "l"]).command, Some(Commands::List { .. })));
        assert!(matches!(parse(&["tu", "create"]).command, Some(Commands::Create { .. })));
        assert!(matches!(parse(&["tu", "c"]).command, Some(Commands::Create { .. })));
        assert_eq!(
            parse(&["tu", "v", "Math"]).command,
            Some(Commands::Vowi {
                subject: vec!["Math".into()]
            })
        );
        assert_eq!(
            parse(&["tu", "tuwel", "art"]).command,
            Some(Commands::Tuwel {
                subject: vec!["art".into()]
            })
        );
        assert_eq!(
            parse(&["tu", "tiss"]).command,
            Some(Commands::Tiss { subject: vec![] })
        );
    }

    #[test]
    fn help_is_builtin() {
        let err = Cli::try_parse_from(["tu", "help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
