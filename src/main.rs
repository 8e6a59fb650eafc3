use std::process::ExitCode;
use std::time::Duration;

use brandvoice::{
    logger::{self, LogLevel, LoggerConfig},
    render_report, BrandVoiceBackend, GenerationRequest, RenderOptions, WebhookClient,
    WebhookConfig,
};
use clap::Parser;

/// Generate a brand voice profile and marketing copy through the n8n workflow.
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Brand or company name
    #[clap(long)]
    brand_name: String,

    /// How the brand describes itself today, in 3-5 sentences
    #[clap(long)]
    brand_info: String,

    /// Who the target audience is
    #[clap(long)]
    audience: String,

    /// What is being offered
    #[clap(long)]
    offer: String,

    /// Append the raw JSON response to the report
    #[clap(long)]
    raw: bool,

    /// Print only the normalized JSON response
    #[clap(long, conflicts_with = "raw")]
    json: bool,

    /// Request timeout in seconds
    #[clap(long, default_value_t = 90)]
    timeout_secs: u64,

    /// Log requests and responses to stderr
    #[clap(short, long)]
    verbose: bool,

    /// Log as JSON lines, to stderr and appended to this file
    #[clap(long)]
    log_file: Option<String>,
}

const INCOMPLETE_INPUT: &str = "Please fill in Brand name, Brand description, Audience, and Offer.";
const BACKEND_FAILURE: &str = "Something went wrong talking to the backend";

/// Runs one generation. `Ok` holds what goes to stdout, `Err` the message for stderr.
async fn run(opts: &Opts, backend: &dyn BrandVoiceBackend) -> Result<String, String> {
    let request = GenerationRequest::new(
        opts.brand_name.as_str(),
        opts.brand_info.as_str(),
        opts.audience.as_str(),
        opts.offer.as_str(),
    );
    if !request.is_complete() {
        return Err(INCOMPLETE_INPUT.to_string());
    }

    eprintln!("Calling the n8n workflow to generate your brand voice and assets...");

    let result = backend
        .generate(&request)
        .await
        .map_err(|e| format!("{}: {}", BACKEND_FAILURE, e))?;

    if opts.json {
        return Ok(result.to_pretty_json());
    }

    Ok(format!(
        "Brand voice and assets generated.\n\n{}",
        render_report(&result, &request, RenderOptions { include_raw: opts.raw })
    ))
}

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Opts::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();

    let mut logger_config = if opts.verbose {
        LoggerConfig::development()
    } else {
        LoggerConfig::new().with_level(LogLevel::Warn)
    };
    if let Some(path) = &opts.log_file {
        logger_config = logger_config.with_file_output(path).with_json_output(true);
    }
    if let Err(e) = logger::init_with_config(logger_config) {
        eprintln!("{}", e);
    }
    if !dotenv_loaded {
        log::debug!("No .env file found, using system environment variables");
    }

    let config =
        WebhookConfig::from_env().with_timeout(Duration::from_secs(opts.timeout_secs));
    logger::log_webhook_config(&config);

    let client = match WebhookClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {}", BACKEND_FAILURE, e);
            return ExitCode::FAILURE;
        }
    };

    match run(&opts, &client).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brandvoice::{BrandVoiceError, GenerationResult, Result};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingBackend {
        calls: AtomicUsize,
        outcome: fn() -> Result<GenerationResult>,
    }

    impl CountingBackend {
        fn new(outcome: fn() -> Result<GenerationResult>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BrandVoiceBackend for CountingBackend {
        async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn bold() -> Result<GenerationResult> {
        Ok(GenerationResult::new(json!({"tone": "bold"})))
    }

    fn exploded() -> Result<GenerationResult> {
        Err(BrandVoiceError::Remote {
            status: 500,
            body: "server exploded".to_string(),
        })
    }

    fn opts(extra: &[&str], brand_info: &str) -> Opts {
        let mut args = vec![
            "brandvoice",
            "--brand-name",
            "Acme",
            "--brand-info",
            brand_info,
            "--audience",
            "Coyotes",
            "--offer",
            "Anvils",
        ];
        args.extend_from_slice(extra);
        Opts::try_parse_from(args).unwrap()
    }

    #[tokio::test]
    async fn test_incomplete_input_skips_backend() {
        let backend = CountingBackend::new(bold);

        let err = run(&opts(&[], "   "), &backend).await.unwrap_err();

        assert_eq!(
            err,
            "Please fill in Brand name, Brand description, Audience, and Offer."
        );
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_backend_error_is_reported_whole() {
        let backend = CountingBackend::new(exploded);

        let err = run(&opts(&[], "We make anvils."), &backend)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            "Something went wrong talking to the backend: n8n returned HTTP 500: server exploded"
        );
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_prints_report() {
        let backend = CountingBackend::new(bold);

        let output = run(&opts(&["--raw"], "We make anvils."), &backend)
            .await
            .unwrap();

        assert!(output.starts_with("Brand voice and assets generated."));
        assert!(output.contains("**Tone label:** `bold`"));
        assert!(output.contains("## 5. Raw JSON"));
    }

    #[tokio::test]
    async fn test_json_flag_prints_only_json() {
        let backend = CountingBackend::new(bold);

        let output = run(&opts(&["--json"], "We make anvils."), &backend)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, json!({"tone": "bold"}));
    }
}
