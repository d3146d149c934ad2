use crate::config::GeminiOptions;
use crate::gemini::GeminiClient;
use crate::prelude::{eprintln, print, println, *};
use coderelay_core::directive::{CodeDirective, DirectiveReply};
use colored::Colorize;

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// Natural-language prompt to send
    pub prompt: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub gemini: GeminiOptions,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let prompt = options.prompt.trim();
    if prompt.is_empty() {
        return Err(eyre!("Prompt is missing"));
    }

    let client = GeminiClient::new(&options.gemini.into_config()?)?;

    if global.verbose {
        eprintln!("Completion endpoint: {}", client.url());
    }

    let reply = client.generate(prompt).await;

    if options.json {
        output_json(&reply)?;
    } else {
        print!("{}", format_reply_text(&reply));
    }

    Ok(())
}

fn output_json(reply: &DirectiveReply) -> Result<()> {
    let json = serde_json::to_string_pretty(reply).context("Failed to serialize reply")?;
    println!("{}", json);
    Ok(())
}

/// Human-readable rendering of a reply.
pub fn format_reply_text(reply: &DirectiveReply) -> String {
    let mut result = String::new();

    let Some(directive) = reply.directive() else {
        // Not directive-shaped, show it as the model produced it.
        let raw = serde_json::to_string_pretty(&reply.to_value()).unwrap_or_default();
        result.push_str(&format!(
            "{}\n",
            "Reply does not have the directive shape:".yellow().bold()
        ));
        result.push_str(&format!("{raw}\n"));
        return result;
    };

    if reply.is_fallback() {
        result.push_str(&format!("{}\n", "Fallback directive".red().bold()));
    }

    result.push_str(&format_directive_header(&directive));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&directive.code);
    if !directive.code.ends_with('\n') {
        result.push('\n');
    }

    result
}

fn format_directive_header(directive: &CodeDirective) -> String {
    let mut result = String::new();
    let run = if directive.run_code {
        "yes".green().bold()
    } else {
        "no".red().bold()
    };

    result.push_str(&format!("{} {}\n", "Run code:".bright_white(), run));
    result.push_str(&format!(
        "{} {}\n",
        "File:".bright_white(),
        directive.file_name.bright_cyan()
    ));
    result.push_str(&format!(
        "{} {}\n",
        "Location:".bright_white(),
        directive.location.bright_cyan()
    ));

    if let Some(editor) = directive.editor.as_deref().filter(|e| !e.is_empty()) {
        result.push_str(&format!("{} {}\n", "Editor:".bright_white(), editor.cyan()));
    }
    if let Some(cmd) = directive.install_cmd.as_deref().filter(|c| !c.is_empty()) {
        result.push_str(&format!("{} {}\n", "Install:".bright_white(), cmd.cyan()));
    }

    result
}
