use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "blacklist-hostnames")]
#[command(about = "Merges the CT log onion list into the crawler's forbidden hostnames.")]
pub struct CommandLine {
    /// Base URI of the configuration API, e.g. https://config.example/api
    #[arg(value_name = "CONFIG_API_URI")]
    pub config_api_uri: Url,

    /// Custom hostname to forbid; repeat to pass several. Replaces the
    /// configured custom hostnames when given.
    #[arg(long = "custom-hostname", value_name = "HOST")]
    pub custom_hostnames: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Custom hostnames passed on the command line, falling back to `configured`
    pub fn custom_hostnames_or(&self, configured: &[String]) -> Vec<String> {
        if self.custom_hostnames.is_empty() {
            configured.to_vec()
        } else {
            self.custom_hostnames.clone()
        }
    }
}
