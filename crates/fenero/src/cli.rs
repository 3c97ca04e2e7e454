//! Clap derive structures for the `fenero` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fenero -- command-line access to the Fenero contact-center MobileApi
#[derive(Debug, Parser)]
#[command(
    name = "fenero",
    version,
    about = "Manage a Fenero contact center from the command line",
    long_about = "Query campaigns, queues and users, monitor live sessions,\n\
        manage dialing lists, download call recordings and run reports\n\
        against the Fenero MobileApi.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "FENERO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Account identifier (overrides profile)
    #[arg(long, env = "FENERO_ACCOUNT_ID", global = true)]
    pub account_id: Option<String>,

    /// Access token (overrides profile)
    #[arg(long, env = "FENERO_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// MobileApi root URL (overrides profile)
    #[arg(long, env = "FENERO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FENERO_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (default: none)
    #[arg(long, env = "FENERO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one row per line, tab-separated (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List campaigns and ACD queues
    #[command(alias = "camp")]
    Campaigns,

    /// List live chat queues
    ChatQueues,

    /// List local and toll-free DIDs
    Dids,

    /// List dispositions
    Dispositions,

    /// List users
    Users,

    /// Real-time call, agent and time statistics
    Stats(StatsArgs),

    /// Silently monitor an agent session
    Monitor(SessionArgs),

    /// Join an agent session as an audible third party
    Barge(SessionArgs),

    /// Manage dialing lists
    #[command(alias = "l")]
    Lists(ListsArgs),

    /// Search and download call recordings
    #[command(alias = "rec")]
    Recordings(RecordingsArgs),

    /// Run a report (raw CSV output)
    #[command(alias = "r")]
    Report(ReportArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Live monitoring ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Campaign IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub campaign_ids: Vec<String>,

    /// ACD group IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub group_ids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session ID (from `fenero stats`)
    #[arg(long)]
    pub session_id: String,

    /// Dialer server IP hosting the session
    #[arg(long)]
    pub server_ip: String,

    /// Phone number that should join the session
    #[arg(long)]
    pub user_phone: String,

    /// Agent ID being monitored
    #[arg(long)]
    pub agent_id: String,
}

// ── Lists ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListsArgs {
    #[command(subcommand)]
    pub command: ListsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ListsCommand {
    /// List dialing lists for the given campaigns
    #[command(alias = "ls")]
    List {
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Create a dialing list
    Create {
        /// List name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Outbound caller ID
        #[arg(long)]
        caller_id: String,

        /// Campaign the list belongs to
        #[arg(long)]
        campaign_id: String,

        /// Number of times records may be recycled
        #[arg(long, default_value_t = 0)]
        reset_times: u32,

        /// Create the list in an inactive state
        #[arg(long)]
        inactive: bool,
    },

    /// Copy custom field definitions between lists
    CopyFields {
        /// Source list ID
        source: String,
        /// Destination list ID
        destination: String,
    },

    /// Activate a list (dialing may begin immediately)
    Start {
        /// List ID
        list_id: String,
    },

    /// Deactivate a list (dialing stops immediately)
    Stop {
        /// List ID
        list_id: String,
    },
}

// ── Recordings ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RecordingsArgs {
    #[command(subcommand)]
    pub command: RecordingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordingsCommand {
    /// Search recordings within a date range
    #[command(alias = "ls")]
    List {
        /// Start date
        #[arg(long)]
        start: String,

        /// End date
        #[arg(long)]
        end: String,

        /// Campaign / ACD queue IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Download a recording's audio file
    #[command(alias = "dl")]
    Download {
        /// Recording ID (also used as the file name)
        recording_id: String,

        /// Destination directory
        #[arg(long, short = 'd', default_value = ".")]
        dir: PathBuf,
    },
}

// ── Reports ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Write the report to a file instead of stdout
    #[arg(long, short = 'f', global = true)]
    pub out_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Date range and timezone shared by windowed reports.
#[derive(Debug, Args)]
pub struct WindowArgs {
    /// Start date
    #[arg(long)]
    pub start: String,

    /// End date
    #[arg(long)]
    pub end: String,

    /// Timezone offset from UTC, e.g. -5
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub tz_offset: String,
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Agent Activity Summary
    AgentActivitySummary {
        #[command(flatten)]
        window: WindowArgs,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Agent Aux Detail
    AgentAuxDetail {
        #[command(flatten)]
        window: WindowArgs,
        /// Report type
        #[arg(long)]
        report_type: String,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Agent Performance Detail
    AgentPerformanceDetail {
        #[command(flatten)]
        window: WindowArgs,
        /// Report type
        #[arg(long)]
        report_type: String,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
        /// Queue IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        queue_ids: Vec<String>,
    },

    /// Agent Log
    AgentLog {
        #[command(flatten)]
        window: WindowArgs,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Agent Staff Time
    AgentStaffTime {
        #[command(flatten)]
        window: WindowArgs,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
    },

    /// Agent Disposition
    AgentDisposition {
        #[command(flatten)]
        window: WindowArgs,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
    },

    /// Campaign do-not-call entries
    CampaignDnc {
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Call Detail Records (inbound)
    CdrInbound {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Call Detail Records (outbound)
    CdrOutbound {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Call Detail Records (inbound and outbound)
    CdrCombined {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Call Detail Usage
    CallDetailUsage {
        #[command(flatten)]
        window: WindowArgs,
        /// Report type
        #[arg(long)]
        report_type: String,
        /// Users (comma-separated)
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
        /// Queue IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        queue_ids: Vec<String>,
    },

    /// Live Chat Log
    LiveChatLog {
        #[command(flatten)]
        window: WindowArgs,
        /// Chat queue IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        chat_queue_ids: Vec<String>,
    },

    /// Interaction Detail
    InteractionDetail {
        #[command(flatten)]
        window: WindowArgs,
        #[command(flatten)]
        filters: ListDispositionFilters,
    },

    /// Interaction Detail Log
    InteractionDetailLog {
        #[command(flatten)]
        window: WindowArgs,
        #[command(flatten)]
        filters: ListDispositionFilters,
    },

    /// System Call Log
    SystemCallLog {
        #[command(flatten)]
        window: WindowArgs,
        /// Queue IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        queue_ids: Vec<String>,
        /// Campaign IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        campaign_ids: Vec<String>,
    },

    /// Lead Detail
    LeadDetail {
        #[command(flatten)]
        window: WindowArgs,
        #[command(flatten)]
        filters: ListQueueFilters,
    },

    /// Disposition Summary
    DispositionSummary {
        #[command(flatten)]
        window: WindowArgs,
        #[command(flatten)]
        filters: ListQueueFilters,
    },

    /// Flash Summary (outbound)
    FlashSummary {
        #[command(flatten)]
        window: WindowArgs,
        /// List IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        list_ids: Vec<String>,
    },
}

#[derive(Debug, Args)]
pub struct ListDispositionFilters {
    /// List IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub list_ids: Vec<String>,
    /// Disposition IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub disposition_ids: Vec<String>,
    /// Campaign IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub campaign_ids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListQueueFilters {
    /// List IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub list_ids: Vec<String>,
    /// Queue IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub queue_ids: Vec<String>,
    /// Campaign IDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub campaign_ids: Vec<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard
    Init,

    /// Show the current configuration (secrets masked)
    Show,

    /// Set a value on the active profile
    Set {
        /// Config key (account_id, access_token_env, base_url, ca_cert, timeout)
        key: String,
        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// Store the active profile's access token in the system keyring
    SetToken,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
