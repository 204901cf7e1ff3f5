//! `studymate ask` — one-shot request to the engine.

use clap::Args;
use studymate_core::{AssistantRequest, AssistantResponse, Mode, StudyContext, StudyPlan};

#[derive(Args)]
pub struct AskArgs {
    /// The message to send
    pub message: String,

    /// Operating mode: chat, plan, or check-in
    #[arg(long, default_value = "chat", value_parser = parse_mode)]
    pub mode: Mode,

    /// Subject of study
    #[arg(long)]
    pub subject: Option<String>,

    /// Outcome goal
    #[arg(long)]
    pub goal: Option<String>,

    /// Exam date (YYYY-MM-DD)
    #[arg(long)]
    pub exam_date: Option<String>,

    /// Minutes available per study day
    #[arg(long)]
    pub minutes: Option<i64>,

    /// Days available to plan
    #[arg(long)]
    pub days: Option<i64>,

    /// Grade level, e.g. "AP" or "undergrad"
    #[arg(long)]
    pub level: Option<String>,

    /// Learning style, e.g. "visual"
    #[arg(long)]
    pub style: Option<String>,

    /// Print the raw response JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    match s {
        "chat" => Ok(Mode::Chat),
        "plan" => Ok(Mode::Plan),
        "check-in" => Ok(Mode::CheckIn),
        other => Err(format!(
            "unknown mode '{other}' (expected chat, plan, or check-in)"
        )),
    }
}

pub async fn run(args: AskArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = to_request(&args);
    let response = studymate_engine::generate(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }

    Ok(())
}

fn to_request(args: &AskArgs) -> AssistantRequest {
    let has_context = args.subject.is_some()
        || args.goal.is_some()
        || args.exam_date.is_some()
        || args.minutes.is_some()
        || args.days.is_some()
        || args.level.is_some()
        || args.style.is_some();

    AssistantRequest {
        message: args.message.clone(),
        history: Vec::new(),
        context: has_context.then(|| StudyContext {
            subject: args.subject.clone(),
            goal: args.goal.clone(),
            exam_date: args.exam_date.clone(),
            grade_level: args.level.clone(),
            learning_style: args.style.clone(),
            time_per_day: args.minutes,
            days_available: args.days,
        }),
        mode: args.mode,
    }
}

pub(crate) fn print_response(response: &AssistantResponse) {
    println!("{}", response.reply);
    println!();
    println!("Summary: {}", response.summary);

    println!("\nAction items:");
    for item in &response.action_items {
        println!("  • {item}");
    }

    if !response.resources.is_empty() {
        println!("\nResources:");
        for resource in &response.resources {
            println!("  {} — {}", resource.title, resource.url);
            println!("    {}", resource.description);
        }
    }

    if let Some(motivation) = &response.motivation {
        println!("\nEnergy reset: {motivation}");
    }
    if let Some(reflection) = &response.reflection {
        println!("Reflect: {reflection}");
    }

    if let Some(plan) = &response.study_plan {
        print_plan(plan);
    }
}

pub(crate) fn print_plan(plan: &StudyPlan) {
    println!("\nStudy plan: {}", plan.summary);
    if let Some(countdown) = plan.exam_countdown {
        println!("Exam in {countdown} days");
    }
    for block in &plan.blocks {
        println!("\n  {} — {}", block.day, block.focus[0]);
        println!("    Deep work: {}", block.deep_work);
        println!("    Review:    {}", block.review);
        for checkpoint in &block.checkpoints {
            println!("    ✓ {checkpoint}");
        }
    }
}
