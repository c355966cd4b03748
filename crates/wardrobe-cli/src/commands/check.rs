use wardrobe_core::WardrobeStore;

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::CliError;
use crate::ui::{badge, blank_line, bullet, header, hint, print, Badge, OutputMode};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json, None)?;

    let rejected = store.rejected();
    let issues = store.check_integrity()?;
    let problems = rejected.len() + issues.len();
    let status = if problems == 0 { "ok" } else { "failed" };

    if ui_ctx.mode.is_json() {
        let output = serde_json::json!({
            "status": status,
            "garments": store.garments().len(),
            "outfits": store.outfits().len(),
            "rejected": rejected,
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(&ui_ctx, &header(&ui_ctx, "check", None));
                blank_line(&ui_ctx);
                let records_badge = if rejected.is_empty() { Badge::Ok } else { Badge::Err };
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        records_badge,
                        &format!(
                            "records ({} garments, {} outfits, {} rejected)",
                            store.garments().len(),
                            store.outfits().len(),
                            rejected.len()
                        ),
                    ),
                );
                for r in rejected {
                    print(
                        &ui_ctx,
                        &bullet(
                            &ui_ctx,
                            &format!("{:?} #{} ({}): {}", r.kind, r.index, r.id, r.reason),
                        ),
                    );
                }
                let refs_badge = if issues.is_empty() { Badge::Ok } else { Badge::Err };
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, refs_badge, &format!("integrity ({} issues)", issues.len())),
                );
                for issue in &issues {
                    print(&ui_ctx, &bullet(&ui_ctx, &issue.to_string()));
                }
                blank_line(&ui_ctx);
                if problems == 0 {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "All checks passed"));
                } else {
                    print(
                        &ui_ctx,
                        &hint(
                            &ui_ctx,
                            "Rejected records are kept in the snapshot untouched. Fix them by hand.",
                        ),
                    );
                }
            }
            OutputMode::Plain | OutputMode::Json => {
                for r in rejected {
                    println!(
                        "rejected={:?} index={} id={} reason={}",
                        r.kind, r.index, r.id, r.reason
                    );
                }
                for issue in &issues {
                    println!("issue={}", issue);
                }
                println!("status={}", status);
            }
        }
    }

    if problems > 0 {
        return Err(CliError::IntegrityFailed { problems }.into());
    }
    Ok(())
}
