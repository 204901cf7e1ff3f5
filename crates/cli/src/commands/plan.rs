//! `studymate plan` — generate a study plan directly.

use clap::Args;
use studymate_core::{AssistantRequest, Mode, StudyContext};

use super::ask;

#[derive(Args)]
pub struct PlanArgs {
    /// Subject of study
    pub subject: String,

    /// Outcome goal
    #[arg(long)]
    pub goal: Option<String>,

    /// Days available to plan
    #[arg(long, default_value_t = 6)]
    pub days: i64,

    /// Minutes available per study day
    #[arg(long, default_value_t = 60)]
    pub minutes: i64,

    /// Exam date (YYYY-MM-DD)
    #[arg(long)]
    pub exam_date: Option<String>,

    /// Print the raw response JSON instead of the rendered plan
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = AssistantRequest {
        message: format!("Create a study plan for {}", args.subject),
        history: Vec::new(),
        context: Some(StudyContext {
            subject: Some(args.subject.clone()),
            goal: args.goal.clone(),
            exam_date: args.exam_date.clone(),
            time_per_day: Some(args.minutes),
            days_available: Some(args.days),
            ..StudyContext::default()
        }),
        mode: Mode::Plan,
    };

    let response = studymate_engine::generate(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if let Some(plan) = &response.study_plan {
        ask::print_plan(plan);
    }

    Ok(())
}
