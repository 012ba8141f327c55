//! Preset command handler

use super::{load_request, CheckReport};
use crate::cli::{Preset, PresetArgs};
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{field_error_rows, OutputWriter};
use restful_core::{presets, RequestContext, RestfulError};
use tracing::{info, instrument, warn};

impl Preset {
    /// The guard a route would run before its handler
    fn guard(self) -> fn(&RequestContext) -> std::result::Result<(), RestfulError> {
        match self {
            Preset::FindAll => presets::find_all,
            Preset::FindOne => presets::find_one,
            Preset::Update => presets::update,
            Preset::Delete => presets::delete,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Preset::FindAll => "find-all",
            Preset::FindOne => "find-one",
            Preset::Update => "update",
            Preset::Delete => "delete",
        }
    }
}

/// Handle the preset command
#[instrument(skip(output), fields(preset = args.preset.name()))]
pub fn handle_preset(args: PresetArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("preset_command", args.preset.name());
    let request = load_request(&args.request)?;

    match (args.preset.guard())(&request) {
        Ok(()) => {
            info!("Request passed the {} preset", args.preset.name());
            output.success(&format!("✓ Request passes the {} preset", args.preset.name()))?;
            if !output.is_human() {
                output.data(&CheckReport::passed())?;
            }
            Ok(())
        }
        Err(err) => {
            warn!(code = err.code(), "Request rejected by the {} preset", args.preset.name());
            let count = err.field_errors().len();
            if output.is_human() {
                output.error(&format!("✗ Request rejected by the {} preset", args.preset.name()))?;
                output.envelope(&err.envelope())?;
                if output.is_verbose() {
                    output.section("Field Errors")?;
                    output.table(
                        &["Location", "Field", "Value", "Message"],
                        field_error_rows(err.field_errors()),
                    )?;
                }
            } else {
                output.data(&CheckReport::failed(err.envelope(), err.field_errors().clone()))?;
            }
            Err(Error::ValidationFailed { count })
        }
    }
}
