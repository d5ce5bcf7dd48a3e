use crate::commands::{
    run_bulletins, run_curate, run_diff, run_discharge, run_profiles, run_resources, run_tips,
    run_validate, Session,
};
use crate::infra::{parse_date, parse_day, parse_season, parse_stage, parse_time, parse_timestamp};
use campus_curation::config::AppConfig;
use campus_curation::curation::{load_registry, DayKey, Season, TimeContext, VisitStage};
use campus_curation::error::AppError;
use campus_curation::telemetry;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "campus-curation",
    about = "Inspect contextual facility guide curation from the command line",
    version
)]
struct Cli {
    /// Catalog file to load (overrides CURATION_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the profiles in the catalog
    Profiles,
    /// Rank a profile's campus resources for a mode and optional visit stage
    Resources(ResourceArgs),
    /// Select neighborhood tips for a mode and temporal context
    Tips(TipArgs),
    /// Show staff bulletins running on a given day
    Bulletins(BulletinArgs),
    /// List the discharge bundle for a profile
    Discharge(ProfileArgs),
    /// Compare two profiles' operational facts
    Diff(DiffArgs),
    /// Assemble the full curated view for a profile
    Curate(CurateArgs),
    /// Check the catalog for authoring problems
    Validate,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Profile slug
    #[arg(long)]
    pub(crate) profile: String,
}

#[derive(Args, Debug)]
pub(crate) struct ResourceArgs {
    #[command(flatten)]
    pub(crate) target: ProfileArgs,
    /// Audience mode (urgent, treatment, visitor, staff). Unknown modes rank as visitor.
    #[arg(long)]
    pub(crate) mode: Option<String>,
    /// Visit stage to foreground (pre_admission, inpatient, discharge)
    #[arg(long, value_parser = parse_stage)]
    pub(crate) stage: Option<VisitStage>,
}

#[derive(Args, Debug)]
pub(crate) struct TipArgs {
    #[command(flatten)]
    pub(crate) target: ProfileArgs,
    /// Audience mode (urgent, treatment, visitor, staff)
    #[arg(long)]
    pub(crate) mode: Option<String>,
    /// Season to narrow by
    #[arg(long, value_parser = parse_season)]
    pub(crate) season: Option<Season>,
    /// Day of week to narrow by (mon..sun)
    #[arg(long, value_parser = parse_day)]
    pub(crate) day: Option<DayKey>,
    /// Time of day to narrow by (day, night)
    #[arg(long, value_parser = parse_time)]
    pub(crate) time: Option<TimeContext>,
    /// Derive season, day and time from a timestamp (YYYY-MM-DDTHH:MM); explicit flags win
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<NaiveDateTime>,
}

#[derive(Args, Debug)]
pub(crate) struct BulletinArgs {
    #[command(flatten)]
    pub(crate) target: ProfileArgs,
    /// Day to evaluate (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct DiffArgs {
    /// Profile the visitor is leaving
    #[arg(long)]
    pub(crate) from: String,
    /// Profile the visitor is heading to
    #[arg(long)]
    pub(crate) to: String,
}

#[derive(Args, Debug)]
pub(crate) struct CurateArgs {
    #[command(flatten)]
    pub(crate) target: ProfileArgs,
    /// Audience mode (urgent, treatment, visitor, staff)
    #[arg(long)]
    pub(crate) mode: Option<String>,
    /// Visit stage (pre_admission, inpatient, discharge)
    #[arg(long, value_parser = parse_stage)]
    pub(crate) stage: Option<VisitStage>,
    /// Moment to curate for (YYYY-MM-DDTHH:MM, defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<NaiveDateTime>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }

    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, catalog = %config.catalog.path.display(), "configuration loaded");

    if let Command::Validate = cli.command {
        return run_validate(&config.catalog.path, cli.json);
    }

    let registry = load_registry(&config.catalog.path)?;
    let session = Session {
        registry: &registry,
        default_mode: config.catalog.default_mode,
        json: cli.json,
    };

    match cli.command {
        Command::Profiles => run_profiles(&session),
        Command::Resources(args) => run_resources(&session, args),
        Command::Tips(args) => run_tips(&session, args),
        Command::Bulletins(args) => run_bulletins(&session, args),
        Command::Discharge(args) => run_discharge(&session, args),
        Command::Diff(args) => run_diff(&session, args),
        Command::Curate(args) => run_curate(&session, args),
        Command::Validate => Ok(()),
    }
}
