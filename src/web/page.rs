//! Server-rendered HTML for the form page.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::coach::{Advice, AdviceSource};
use crate::interface::render::{DISCLAIMER, daily_targets, explanation, per_meal, servings};
use crate::web::dto::PlanForm;

const STYLE: &str = "body{font-family:Arial,sans-serif;max-width:800px;margin:30px auto;padding:10px;}\
h1{color:#1a73e8;}\
form input[type=text]{width:120px;padding:6px;margin:6px 6px 6px 0;}\
.btn{background:#1a73e8;color:white;padding:8px 12px;border:none;border-radius:4px;cursor:pointer;}\
pre{background:#f5f5f5;padding:12px;border-radius:6px;white-space:pre-wrap;}\
.card{border:1px solid #eee;padding:12px;border-radius:6px;margin-top:12px;}\
.muted{color:#666;font-size:13px;}\
.error{color:#b00020;}";

fn field(label: &str, name: &str, value: &str) -> String {
    format!(
        "{} <input type=\"text\" name=\"{}\" value=\"{}\"> ",
        label,
        name,
        encode_double_quoted_attribute(value)
    )
}

fn card(title: &str, body: &str) -> String {
    format!(
        "<div class=\"card\"><strong>{}</strong><pre>{}</pre></div>",
        title,
        encode_text(body)
    )
}

fn form(values: &PlanForm) -> String {
    format!(
        "<form method=\"post\">{}{}{}{}{}<button class=\"btn\" type=\"submit\">Get Plan</button></form>",
        field("Height (cm):", "height", &values.height),
        field("Weight (kg):", "weight", &values.weight),
        field("Age:", "age", &values.age),
        field("Goal (cut/bulk/recomp):", "goal", &values.goal),
        field(
            "Activity (sedentary/light/moderate/high/athlete):",
            "activity",
            &values.activity
        ),
    )
}

fn layout(body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Diet Coach</title><style>{}</style></head>\n<body>\n<h1>Diet Coach</h1>\n{}\n</body>\n</html>\n",
        STYLE, body
    )
}

/// Empty form with pre-filled values.
pub fn form_page(values: &PlanForm) -> String {
    layout(&form(values))
}

/// Form with a validation message.
pub fn error_page(values: &PlanForm, message: &str) -> String {
    layout(&format!(
        "{}<div class=\"card error\"><strong>Could not calculate a plan:</strong> {}</div>",
        form(values),
        encode_text(message)
    ))
}

/// Form, echoed inputs and every section of the plan.
pub fn plan_page(values: &PlanForm, advice: &Advice) -> String {
    let plan = &advice.plan;
    let echo = format!(
        "<div class=\"card\"><strong>Inputs you submitted:</strong><div class=\"muted\">\
Height: {} cm • Weight: {} kg • Age: {} • Goal: {} • Activity: {}</div></div>",
        encode_text(&values.height),
        encode_text(&values.weight),
        plan.energy.age,
        plan.input.goal,
        plan.input.activity_level
    );

    let mut body = vec![
        form(values),
        echo,
        card(
            "How the target was calculated (explainable):",
            &explanation(&plan.energy),
        ),
        card("Daily target &amp; macros:", &daily_targets(&plan.macros)),
        card("Per-meal split (approx):", &per_meal(&plan.meals)),
        card(
            "Practical serving suggestions (approx):",
            &servings(&plan.portions, &plan.macros),
        ),
    ];
    if let AdviceSource::Remote { model } = &advice.source {
        let title = format!("Coach notes ({}):", encode_text(model));
        body.push(card(&title, &advice.narrative));
    }
    body.push(format!(
        "<div class=\"card muted\"><strong>Note:</strong> {}</div>",
        encode_text(DISCLAIMER)
    ));

    layout(&body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::LocalCoach;
    use crate::models::{BiometricInput, Goal};

    #[test]
    fn test_form_values_are_escaped() {
        let values = PlanForm {
            height: "\"><script>".to_string(),
            ..PlanForm::prefilled(30)
        };
        let html = error_page(&values, "height must be a number, got '<b>'");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_form_page_prefill() {
        let html = form_page(&PlanForm::prefilled(30));
        assert!(html.contains("name=\"height\" value=\"170\""));
        assert!(html.contains("name=\"goal\" value=\"cut\""));
    }

    #[test]
    fn test_coach_notes_only_for_remote_advice() {
        let local = LocalCoach::default()
            .advise_now(&BiometricInput::new(170.0, 70.0, Goal::Cut))
            .unwrap();
        let values = PlanForm::prefilled(30);

        let html = plan_page(&values, &local);
        assert!(!html.contains("Coach notes"));

        let remote = Advice {
            narrative: "Eat <more> dal.".to_string(),
            source: AdviceSource::Remote {
                model: "llama3-8b-8192".to_string(),
            },
            ..local
        };
        let html = plan_page(&values, &remote);
        assert!(html.contains("Coach notes (llama3-8b-8192):"));
        assert!(html.contains("Eat &lt;more&gt; dal."));
    }
}
