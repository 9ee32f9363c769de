//! CLI command definitions

use clap::Parser;

/// CLI arguments for vision-runner
#[derive(Parser, Debug)]
#[command(name = "vision-runner")]
#[command(version, about = "Extract readable text from an image with an OCR agent")]
#[command(long_about = r#"
Runs a one-agent, one-task crew whose single capability reads text from
an image. The locator may be a local file path or an http(s) URL.

The vision endpoint is configured through the environment:
  OPENAI_API_KEY            Bearer token (required)
  CREWRUN_VISION_ENDPOINT   API base URL (default: https://api.openai.com/v1)
  CREWRUN_VISION_MODEL      Model name (default: gpt-4o-mini)

Example:
  vision-runner https://example.com/image.png
  vision-runner ./scans/receipt.jpg
"#)]
pub struct VisionCli {
    /// Path or URL of the image to read
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI arguments for scrape-runner
#[derive(Parser, Debug)]
#[command(name = "scrape-runner")]
#[command(version, about = "Extract matching elements from a web page with a scraping agent")]
#[command(long_about = r#"
Runs a one-agent, one-task crew whose single capability extracts the
text of elements matching a CSS selector from a web page.

Example:
  scrape-runner https://example.com "div.title"
  scrape-runner https://news.example.org "article h2 a"
"#)]
pub struct ScrapeCli {
    /// URL of the page to scrape
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// CSS selector for the elements to extract
    #[arg(value_name = "SELECTOR")]
    pub selector: String,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}
