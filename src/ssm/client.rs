//! SSM client construction

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use log::debug;

use crate::error::{CleanerError, Result};

/// Overrides applied on top of the shared AWS configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Custom endpoint (local stacks, mock servers)
    pub endpoint_url: Option<String>,
}

/// SSM API client
pub struct SsmClient {
    client: Client,
}

impl SsmClient {
    /// Wrap an already configured SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Load the shared AWS configuration (env, profile, IMDS) and build a client
    ///
    /// SDK retries are disabled: every failed call surfaces immediately.
    pub async fn from_options(options: &ClientOptions) -> Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(region) = &options.region {
            debug!("Using region override: {}", region);
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &options.profile {
            debug!("Using AWS profile: {}", profile);
            loader = loader.profile_name(profile);
        }
        if let Some(url) = &options.endpoint_url {
            validate_endpoint_url(url)?;
            debug!("Using endpoint override: {}", url);
            loader = loader.endpoint_url(url);
        }

        let shared_config = loader.load().await;
        match shared_config.region() {
            Some(region) => debug!("Resolved region: {}", region),
            None => {
                return Err(CleanerError::Config(
                    "No AWS region configured; pass --region or set AWS_REGION".to_string(),
                ))
            }
        }

        Ok(Self::new(Client::new(&shared_config)))
    }

    /// Create a client against a fixed endpoint with static test credentials
    #[cfg(test)]
    pub fn with_endpoint(endpoint: &str) -> Self {
        use aws_sdk_ssm::config::Credentials;

        let config = aws_sdk_ssm::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new(
                "test-access-key",
                "test-secret-key",
                None,
                None,
                "test",
            ))
            .endpoint_url(endpoint)
            .retry_config(RetryConfig::disabled())
            .build();

        Self::new(Client::from_conf(config))
    }

    pub(crate) fn sdk(&self) -> &Client {
        &self.client
    }
}

/// Convert any SDK error into a service error with the full cause chain
pub(crate) fn service_error<E>(context: String, err: E) -> CleanerError
where
    E: std::error::Error,
{
    CleanerError::Service {
        context,
        message: DisplayErrorContext(&err).to_string(),
    }
}

fn validate_endpoint_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CleanerError::Config(format!(
            "Endpoint URL '{}' must start with http:// or https://",
            url
        )))
    }
}
