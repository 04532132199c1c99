//! Final step configuring the runtime server.

use crate::pipeline::context::BuildContext;
use crate::pipeline::error::BuildStepError;
use tracing::warn;

/// Command that pre-generates jetty's quickstart metadata at image build
/// time, trading image build time for faster container startup.
const JETTY_QUICKSTART_COMMAND: &str =
    "RUN java -jar $JETTY_HOME/start.jar --approve-all-licenses --add-to-start=quickstart";

/// Always runs last so it can see the final artifact location and the
/// complete runtime stage. Appending zero lines is a valid outcome.
#[derive(Debug)]
pub struct RuntimeOptionsBuildStep;

impl RuntimeOptionsBuildStep {
    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        let config = context.runtime_config();

        if config.jetty_quickstart == Some(true) {
            let is_jetty = config
                .server
                .as_deref()
                .map(|server| server.starts_with("jetty"))
                .unwrap_or(false);

            if is_jetty {
                context
                    .dockerfile_mut()
                    .append_line(JETTY_QUICKSTART_COMMAND);
            } else {
                warn!("jetty_quickstart is set but the configured server is not a jetty flavor; ignoring");
            }
        }

        Ok(())
    }
}
