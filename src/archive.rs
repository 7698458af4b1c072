use anyhow::{anyhow, Result};
use archiver_core::{
    entities::EmailAddress,
    gateways::gitlab::GitLabGateway,
    usecases::{archive_repository, ArchiveOutcome, ArchiveParams},
};
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub archived: usize,
    /// Passed all checks during a dry run.
    pub checked: usize,
    pub failed: usize,
}

/// Processes `references` one after another and reports progress to `out`.
///
/// The first failing repository aborts the run unless `keep_going` is set.
pub fn archive_all<G, W>(
    gateway: &G,
    caller: &EmailAddress,
    references: &[String],
    params: &ArchiveParams,
    keep_going: bool,
    out: &mut W,
) -> Result<Summary>
where
    G: GitLabGateway + ?Sized,
    W: Write,
{
    let mut summary = Summary::default();
    for reference in references {
        writeln!(out, "Repository: {reference}")?;
        match archive_repository(gateway, caller, reference, params) {
            Ok(outcome) => {
                report_outcome(out, &outcome)?;
                if outcome.archived {
                    summary.archived += 1;
                } else {
                    summary.checked += 1;
                }
            }
            Err(err) => {
                summary.failed += 1;
                if err.is_access_denied() {
                    writeln!(out, "Access denied: {err}")?;
                } else {
                    writeln!(out, "Failed: {err}")?;
                }
                if !keep_going {
                    return Err(anyhow::Error::new(err).context(format!(
                        "Could not archive {reference}"
                    )));
                }
            }
        }
    }
    let Summary {
        archived,
        checked,
        failed,
    } = summary;
    if params.dry_run {
        writeln!(
            out,
            "Checked {} repositories: {checked} could be archived, {failed} failed",
            references.len()
        )?;
    } else {
        writeln!(
            out,
            "Processed {} repositories: {archived} archived, {failed} failed",
            references.len()
        )?;
    }
    if failed > 0 {
        return Err(anyhow!(
            "{failed} of {} repositories could not be archived",
            references.len()
        ));
    }
    Ok(summary)
}

fn report_outcome<W: Write>(out: &mut W, outcome: &ArchiveOutcome) -> Result<()> {
    let ArchiveOutcome {
        path,
        project_id,
        username,
        access_level,
        archived,
    } = outcome;
    writeln!(out, "Project ID: {project_id}")?;
    writeln!(
        out,
        "Username: {username}, Access Level: {} ({access_level})",
        access_level.to_primitive()
    )?;
    if *archived {
        writeln!(out, "Archived {path}")?;
    } else {
        writeln!(out, "{path} can be archived (dry run)")?;
    }
    Ok(())
}
