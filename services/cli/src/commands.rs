use crate::cli::{BulletinArgs, CurateArgs, DiffArgs, ProfileArgs, ResourceArgs, TipArgs};
use crate::infra::{resolve_mode, tip_context};
use crate::render::{
    emit_json, print_bulletins, print_comparison, print_discharge, print_issues,
    print_missing_profile, print_profiles, print_resources, print_tips, print_view,
    ProfileSummary,
};
use campus_curation::curation::{
    bulletins_for_today, compare_profiles, discharge_resources, parse_catalog,
    rank_resources, rank_resources_for_stage, resolve_day_key, select_tips, validate_catalog,
    AudienceMode, CatalogError, CurationContext, CurationEngine, FacilityProfile, IssueSeverity,
    ProfileRegistry, TipContext,
};
use campus_curation::error::AppError;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Per-invocation state shared by every command.
pub(crate) struct Session<'a> {
    pub(crate) registry: &'a ProfileRegistry,
    pub(crate) default_mode: AudienceMode,
    pub(crate) json: bool,
}

impl<'a> Session<'a> {
    fn profile(&self, id: &str) -> Option<&'a FacilityProfile> {
        let registry: &'a ProfileRegistry = self.registry;
        let profile = registry.get(id);
        if profile.is_none() {
            debug!(profile = id, "profile lookup missed");
        }
        profile
    }
}

pub(crate) fn run_profiles(session: &Session<'_>) -> Result<(), AppError> {
    let summaries: Vec<ProfileSummary<'_>> =
        session.registry.iter().map(ProfileSummary::from).collect();
    if session.json {
        return emit_json(&summaries);
    }
    print_profiles(&summaries);
    Ok(())
}

pub(crate) fn run_resources(session: &Session<'_>, args: ResourceArgs) -> Result<(), AppError> {
    let Some(profile) = session.profile(&args.target.profile) else {
        print_missing_profile(&args.target.profile);
        return Ok(());
    };

    let mode = resolve_mode(args.mode.as_deref(), session.default_mode);
    let resources = match args.stage {
        Some(stage) => rank_resources_for_stage(profile, mode, stage),
        None => rank_resources(profile, mode),
    };

    if session.json {
        return emit_json(&resources);
    }
    print_resources(profile, mode, args.stage, &resources);
    Ok(())
}

pub(crate) fn run_tips(session: &Session<'_>, args: TipArgs) -> Result<(), AppError> {
    let Some(profile) = session.profile(&args.target.profile) else {
        print_missing_profile(&args.target.profile);
        return Ok(());
    };

    let mode = resolve_mode(args.mode.as_deref(), session.default_mode);
    let context = tip_context(args.now, args.season, args.day, args.time);
    let tips = select_tips(profile, mode, context.as_ref());

    if session.json {
        return emit_json(&tips);
    }
    print_tips(profile, mode, context.as_ref(), &tips);
    Ok(())
}

pub(crate) fn run_bulletins(session: &Session<'_>, args: BulletinArgs) -> Result<(), AppError> {
    let Some(profile) = session.profile(&args.target.profile) else {
        print_missing_profile(&args.target.profile);
        return Ok(());
    };

    let now = args.date.and_then(|date| date.and_hms_opt(0, 0, 0));
    let bulletins = bulletins_for_today(profile, now);

    if session.json {
        return emit_json(&bulletins);
    }
    print_bulletins(profile, resolve_day_key(now), &bulletins);
    Ok(())
}

pub(crate) fn run_discharge(session: &Session<'_>, args: ProfileArgs) -> Result<(), AppError> {
    let Some(profile) = session.profile(&args.profile) else {
        print_missing_profile(&args.profile);
        return Ok(());
    };

    let resources = discharge_resources(profile);
    if session.json {
        return emit_json(&resources);
    }
    print_discharge(profile, &resources);
    Ok(())
}

pub(crate) fn run_diff(session: &Session<'_>, args: DiffArgs) -> Result<(), AppError> {
    let comparison = compare_profiles(session.registry, &args.from, &args.to);
    if session.json {
        return emit_json(&comparison);
    }
    print_comparison(&args.from, &args.to, &comparison);
    Ok(())
}

pub(crate) fn run_curate(session: &Session<'_>, args: CurateArgs) -> Result<(), AppError> {
    let mode = resolve_mode(args.mode.as_deref(), session.default_mode);
    let now = args.now.unwrap_or_else(|| Local::now().naive_local());
    let mut context = CurationContext::new(mode)
        .with_tips(TipContext::at(now))
        .at(now);
    if let Some(stage) = args.stage {
        context = context.with_stage(stage);
    }

    let engine = CurationEngine::with_defaults(session.registry);
    let Some(view) = engine.curate(&args.target.profile, &context) else {
        print_missing_profile(&args.target.profile);
        return Ok(());
    };

    if session.json {
        return emit_json(&view);
    }
    print_view(&view);
    Ok(())
}

pub(crate) fn run_validate(path: &Path, json: bool) -> Result<(), AppError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = parse_catalog(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let issues = validate_catalog(&profiles);
    if json {
        emit_json(&issues)?;
    } else {
        print_issues(path, profiles.len(), &issues);
    }

    let errors: Vec<_> = issues
        .into_iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .collect();
    if !errors.is_empty() {
        return Err(CatalogError::Invalid(errors).into());
    }

    let registry = ProfileRegistry::new(profiles)?;
    info!(profiles = registry.len(), "catalog is valid");
    Ok(())
}
