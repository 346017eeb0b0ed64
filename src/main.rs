//! Help-desk ticket browser - Entry Point

use chrono::Local;
use clap::{Args as ClapArgs, Parser, Subcommand};
use helpdesk::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use helpdesk::model::directory::{search_users, users, ROSTER, TEAMS};
use helpdesk::model::error::AppError;
use helpdesk::model::stats::team_report;
use helpdesk::model::{
    Attachment, CategoryReport, InternalStatus, Severity, TicketDetail, TicketId, Visibility,
};
use helpdesk::query::{parse_constraint, SortKey, SortSpec};
use helpdesk::source::DatasetSource;
use helpdesk::state::{
    DashboardState, Desk, DetailState, HistoryOrder, ListingState, NewInteractionDraft,
    NewTicketDraft, PER_PAGE_OPTIONS,
};
use helpdesk::view;
use std::path::PathBuf;
use tracing::info;

/// Help-desk ticket browser - filter, sort and page through support tickets
#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(version)]
#[command(about = "Browse and triage help-desk tickets from the command line")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ticket dataset (JSON); the built-in sample is used when omitted
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Screen to print
    #[command(subcommand)]
    pub command: Command,
}

/// Screens and forms, one per subcommand
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// All tickets, filtered, sorted and paged
    List(ListArgs),
    /// Tickets owned by the current user
    Mine,
    /// Summary cards and the latest tickets
    Dashboard(DashboardArgs),
    /// One ticket with its interaction history
    Show {
        /// Ticket id, with or without a leading '#'
        id: TicketId,
        /// Show the history oldest first
        #[arg(long)]
        oldest_first: bool,
    },
    /// Tickets per category and resolution rate
    Report,
    /// Ticket workload per staff member
    TeamReport,
    /// User accounts
    Users {
        /// Case-insensitive name or e-mail filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Support teams and their members
    Teams,
    /// Open a new ticket (kept in memory for this run)
    NewTicket(NewTicketArgs),
    /// Add an interaction to a ticket (kept in memory for this run)
    Reply(ReplyArgs),
}

/// Parameters of the ticket list
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct ListArgs {
    /// Search id, title, owner and customer
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category constraint, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Severity constraint, or "all"
    #[arg(long, default_value = "all")]
    pub severity: String,

    /// Status constraint, or "all"
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Field to sort by (id, title, owner, created-at, interactions, ...)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Number of pages to reveal
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Tickets per page: 10, 20, 50 or 100
    #[arg(long, value_parser = parse_per_page)]
    pub per_page: Option<usize>,
}

/// Filters applied to the dashboard tables
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct DashboardArgs {
    /// Search id, title, owner and customer
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category constraint, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Severity constraint, or "all"
    #[arg(long, default_value = "all")]
    pub severity: String,
}

/// Fields of the new-ticket form
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct NewTicketArgs {
    /// Short summary of the problem
    #[arg(long, default_value = "")]
    pub title: String,

    /// What happened and how to reproduce it
    #[arg(long, default_value = "")]
    pub description: String,

    /// Tool slug, e.g. geolab
    #[arg(long)]
    pub tool: Option<String>,

    /// High, Medium or Low
    #[arg(long)]
    pub severity: Option<Severity>,

    /// Category, Support when omitted
    #[arg(long)]
    pub category: Option<String>,

    /// Attachment file name (repeatable)
    #[arg(long = "attach")]
    pub attachments: Vec<String>,
}

/// Fields of the new-interaction form
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct ReplyArgs {
    /// Ticket id, with or without a leading '#'
    pub id: TicketId,

    /// Interaction text
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Staff-only interaction
    #[arg(long)]
    pub internal: bool,

    /// Recipient of an internal interaction (repeatable)
    #[arg(long = "to")]
    pub recipients: Vec<String>,

    /// Reassign the ticket
    #[arg(long)]
    pub owner: Option<String>,

    /// New severity
    #[arg(long)]
    pub severity: Option<Severity>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New tool slug
    #[arg(long)]
    pub tool: Option<String>,

    /// New internal status
    #[arg(long)]
    pub internal_status: Option<InternalStatus>,

    /// Expected delivery date, YYYY-MM-DD
    #[arg(long)]
    pub delivery_date: Option<String>,

    /// Attachment file name (repeatable)
    #[arg(long = "attach")]
    pub attachments: Vec<String>,
}

/// Accept only the page sizes the list screen offers.
fn parse_per_page(raw: &str) -> Result<usize, String> {
    let per_page: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if PER_PAGE_OPTIONS.contains(&per_page) {
        Ok(per_page)
    } else {
        let offered: Vec<String> = PER_PAGE_OPTIONS.iter().map(ToString::to_string).collect();
        Err(format!("page size must be one of {}", offered.join(", ")))
    }
}

/// Resolve configuration through the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file)?;
    let with_env = apply_env_overrides(merged);

    let per_page_override = match &args.command {
        Command::List(list) => list.per_page,
        _ => None,
    };
    Ok(apply_cli_overrides(with_env, args.data.clone(), per_page_override))
}

fn attachments(names: &[String]) -> Vec<Attachment> {
    names.iter().map(Attachment::from_file_name).collect()
}

/// Execute one command against the loaded tickets and return its output.
fn run(
    command: Command,
    config: &ResolvedConfig,
    tickets: Vec<TicketDetail>,
) -> Result<String, AppError> {
    let mut desk = Desk::new(tickets);

    let output = match command {
        Command::List(list) => {
            let mut state = ListingState::new(config.per_page);
            state.set_search(list.search.unwrap_or_default());
            state.set_category(parse_constraint(&list.category)?);
            state.set_severity(parse_constraint(&list.severity)?);
            state.set_status(parse_constraint(&list.status)?);
            state.set_sort(list.sort.map(|key| {
                if list.desc {
                    SortSpec::descending(key)
                } else {
                    SortSpec::ascending(key)
                }
            }));
            for _ in 1..list.page {
                if !state.load_more(desk.tickets()) {
                    break;
                }
            }
            view::render_listing(&state.view(desk.tickets()), &state)
        }
        Command::Mine => {
            let mine = desk.owned_by(&config.current_user);
            format!(
                "Tickets owned by {} ({})\n\n{}",
                config.current_user,
                mine.len(),
                view::render_ticket_table(&mine)
            )
        }
        Command::Dashboard(dash) => {
            let state = DashboardState {
                search: dash.search.unwrap_or_default(),
                category: parse_constraint(&dash.category)?,
                severity: parse_constraint(&dash.severity)?,
            };
            view::render_dashboard(&state.view(desk.tickets(), config.dashboard_limit))
        }
        Command::Show { id, oldest_first } => {
            let detail = desk.get(id).ok_or(AppError::TicketNotFound { id })?;
            let order = if oldest_first {
                HistoryOrder::OldestFirst
            } else {
                HistoryOrder::NewestFirst
            };
            view::render_detail(detail, &DetailState::new(order))
        }
        Command::Report => {
            view::render_category_report(&CategoryReport::from_tickets(desk.tickets()))
        }
        Command::TeamReport => {
            view::render_team_report(&team_report(desk.tickets(), &ROSTER))
        }
        Command::Users { search } => {
            let all = users(&config.email_domain);
            view::render_users(&search_users(&all, search.as_deref().unwrap_or("")))
        }
        Command::Teams => view::render_teams(&TEAMS),
        Command::NewTicket(new) => {
            let draft = NewTicketDraft {
                title: new.title,
                description: new.description,
                tool: new.tool,
                severity: new.severity,
                category: parse_constraint(new.category.as_deref().unwrap_or(""))?,
                attachments: attachments(&new.attachments),
            };
            let now = Local::now().naive_local();
            let created = desk.submit_ticket(draft, &config.current_user, now)?;
            view::render_detail(created, &DetailState::default())
        }
        Command::Reply(reply) => {
            let draft = NewInteractionDraft {
                message: reply.message,
                visibility: if reply.internal {
                    Visibility::Internal
                } else {
                    Visibility::Public
                },
                recipients: reply.recipients,
                attachments: attachments(&reply.attachments),
                owner: reply.owner,
                severity: reply.severity,
                category: parse_constraint(reply.category.as_deref().unwrap_or(""))?,
                tool: reply.tool,
                internal_status: reply.internal_status,
                delivery_date: reply.delivery_date,
            };
            let now = Local::now().naive_local();
            desk.submit_interaction(reply.id, draft, &config.current_user, now)?;
            let detail = desk
                .get(reply.id)
                .ok_or(AppError::TicketNotFound { id: reply.id })?;
            view::render_detail(detail, &DetailState::default())
        }
    };

    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    helpdesk::logging::init(&config.log_file_path, args.verbose)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let tickets = DatasetSource::from_path(config.data_file.clone()).load()?;

    let output = run(args.command, &config, tickets)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use helpdesk::model::Category;

    fn builtin() -> Vec<TicketDetail> {
        DatasetSource::Builtin.load().unwrap()
    }

    fn run_args(argv: &[&str]) -> Result<String, AppError> {
        let mut full = vec!["helpdesk"];
        full.extend_from_slice(argv);
        let args = Args::try_parse_from(full).unwrap();
        run(args.command, &ResolvedConfig::default(), builtin())
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["helpdesk", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["helpdesk", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_is_required() {
        let result = Args::try_parse_from(["helpdesk"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_defaults() {
        let args = Args::parse_from(["helpdesk", "list"]);
        let Command::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.search, None);
        assert_eq!(list.category, "all");
        assert_eq!(list.severity, "all");
        assert_eq!(list.status, "all");
        assert_eq!(list.sort, None);
        assert!(!list.desc);
        assert_eq!(list.page, 1);
        assert_eq!(list.per_page, None);
    }

    #[test]
    fn test_list_all_flags() {
        let args = Args::parse_from([
            "helpdesk",
            "list",
            "-s",
            "printer",
            "--category",
            "Bug",
            "--sort",
            "created-at",
            "--desc",
            "--page",
            "2",
            "--per-page",
            "10",
        ]);
        let Command::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.search.as_deref(), Some("printer"));
        assert_eq!(list.category, "Bug");
        assert_eq!(list.sort, Some(SortKey::CreatedAt));
        assert!(list.desc);
        assert_eq!(list.page, 2);
        assert_eq!(list.per_page, Some(10));
    }

    #[test]
    fn test_desc_requires_sort() {
        let result = Args::try_parse_from(["helpdesk", "list", "--desc"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_page_rejects_zero() {
        let result = Args::try_parse_from(["helpdesk", "list", "--page", "0"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_per_page_only_accepts_offered_sizes() {
        for size in ["7", "0", "many"] {
            let result = Args::try_parse_from(["helpdesk", "list", "--per-page", size]);
            assert_eq!(
                result.unwrap_err().kind(),
                clap::error::ErrorKind::ValueValidation,
                "--per-page {size}"
            );
        }
        let args = Args::parse_from(["helpdesk", "list", "--per-page", "100"]);
        let Command::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.per_page, Some(100));
    }

    #[test]
    fn test_unknown_sort_key_rejected() {
        let result = Args::try_parse_from(["helpdesk", "list", "--sort", "colour"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_accepts_hash_prefix() {
        let args = Args::parse_from(["helpdesk", "show", "#1001", "--oldest-first"]);
        assert_eq!(
            args.command,
            Command::Show {
                id: TicketId::new(1001).unwrap(),
                oldest_first: true
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["helpdesk", "report", "--data", "t.json", "-v"]);
        assert_eq!(args.data, Some(PathBuf::from("t.json")));
        assert!(args.verbose);
        assert_eq!(args.command, Command::Report);
    }

    #[test]
    fn test_per_page_flows_through_config_precedence_chain() {
        let args = Args::parse_from([
            "helpdesk",
            "--config",
            "/nonexistent/helpdesk.toml",
            "list",
            "--per-page",
            "50",
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.per_page, 50);
    }

    #[test]
    fn list_rejects_unknown_category() {
        let err = run_args(&["list", "--category", "Feature"]).unwrap_err();
        assert!(matches!(err, AppError::InvalidValue(_)));
    }

    #[test]
    fn list_pages_accumulate() {
        let first = run_args(&["list"]).unwrap();
        assert!(first.contains("Showing 20 of 32 tickets"), "{first}");

        let args = Args::parse_from(["helpdesk", "list", "--page", "2"]);
        let config = ResolvedConfig {
            per_page: 10,
            ..ResolvedConfig::default()
        };
        let out = run(args.command, &config, builtin()).unwrap();
        assert!(out.contains("Showing 20 of 32 tickets"), "{out}");
        assert!(out.ends_with("More available: --page 3"));
    }

    #[test]
    fn show_unknown_ticket_is_reported() {
        let err = run_args(&["show", "999999"]).unwrap_err();
        assert_eq!(err.to_string(), "Ticket #999999 not found");
    }

    #[test]
    fn new_ticket_defaults_to_support() {
        let out = run_args(&[
            "new-ticket",
            "--title",
            "Relatório de vendas vazio",
            "--description",
            "Nenhum dado após atualização",
            "--tool",
            "geolab",
            "--severity",
            "Low",
        ])
        .unwrap();
        assert!(out.starts_with("#1033 Relatório de vendas vazio"), "{out}");
        assert!(out.contains(&format!("Category:         {}", Category::Support.label())));
        assert!(out.contains("Owner:            Unassigned"));
    }

    #[test]
    fn new_ticket_reports_every_missing_field() {
        let err = run_args(&["new-ticket"]).unwrap_err();
        let message = err.to_string();
        for field in ["title", "description", "tool", "severity"] {
            assert!(message.contains(field), "{field} missing from {message}");
        }
    }

    #[test]
    fn reply_appends_interaction() {
        let out = run_args(&[
            "reply",
            "1001",
            "-m",
            "Verificando com o time",
            "--internal",
            "--to",
            "Igor Paulino",
        ])
        .unwrap();
        assert!(out.contains("Giovana Lana (Internal)"));
        assert!(out.contains("Recipients: Igor Paulino"));
    }

    #[test]
    fn reply_requires_message() {
        let err = run_args(&["reply", "1001"]).unwrap_err();
        assert!(matches!(err, AppError::Form(_)));
    }
}
