//! Deterministic reply templates.
//!
//! Every generator failure path lands on one of these, so a caller always
//! receives a well-formed reply. Texts are fixed per problem type; the
//! wrap-up plan is assembled from fixed steps plus an optional safety step.

use super::{ProblemType, RiskTier};

/// Fixed crisis-support message with emergency contact guidance.
pub const CRISIS_MESSAGE: &str = "You used language that suggests severe distress, and I'm really \
     sorry you're feeling this overwhelmed. If you feel you might act on these thoughts, please \
     contact emergency services or a crisis line right now (call or text 988 in the US). You \
     deserve immediate, human support.";

/// Appended to the crisis message when a known duration passes the
/// screener threshold.
pub const SCREENER_SUGGESTION: &str = "Because this has been going on for a while, a brief \
     screening like the PHQ-9 (depression) or GAD-7 (anxiety) could help, along with reaching \
     out to a clinician.";

/// Substitute used when a reply would repeat the previous one verbatim.
pub const REPEAT_ACKNOWLEDGEMENT: &str = "I hear you. I'm here. If you want, we can try a grounding \
     exercise or make a simple plan.";

/// Closing line appended after the action plan steps.
pub const WRAP_UP_CLOSING: &str = "Try the first step now (grounding). If things feel severe, \
     please get immediate help.";

/// Deterministic focused reply keyed by problem type.
///
/// Used whenever the generator is absent, fails, or times out.
pub fn fallback_reply(problem_type: ProblemType) -> &'static str {
    match problem_type {
        ProblemType::Relationship => {
            "I'm so sorry. That was a betrayal, and you didn't deserve it. Right now, focus on \
             one small thing: breathe slowly for the next two minutes and put on something that \
             comforts you. Afterwards, if you want, we can outline three things to do in the \
             next 24 hours to support yourself."
        }
        ProblemType::Job => {
            "That's a really unfair situation - workplaces can be brutal. Take a short break, \
             write down what happened in one paragraph, and then we can map immediate steps: \
             emotional stabilization, documenting the event, and exploring next options."
        }
        ProblemType::Other => {
            "I hear you. That sounds really hard. I can sit with you, suggest grounding \
             exercises, or help with a short plan to get through the next few hours."
        }
    }
}

/// Builds the 4-5 step wrap-up action plan.
///
/// Steps 1-2 stabilize, steps 3-4 are keyed by problem type, and an extra
/// safety step is added when the session's risk ceiling is elevated.
pub fn action_plan(problem_type: ProblemType, risk: RiskTier) -> String {
    let mut steps: Vec<&str> = vec![
        "1) Immediate grounding: five slow breaths (4 in, 4 out), sip water, sit or lie down \
         somewhere safe.",
        "2) Body care in the next hour: hydrate, eat a small snack, put on comfy clothes, rest \
         if needed.",
    ];

    match problem_type {
        ProblemType::Relationship => {
            steps.push(
                "3) Emotional processing: write a short letter (you don't need to send it) \
                 describing what happened and how it felt.",
            );
            steps.push(
                "4) Social support: message one trusted person 'I need a bit of support right \
                 now' and set a time to talk.",
            );
        }
        ProblemType::Job => {
            steps.push(
                "3) Practical step: write down the facts (dates, people, what happened) and \
                 keep it for your records.",
            );
            steps.push(
                "4) Career step: update one line on your resume, or look at one job posting to \
                 begin momentum.",
            );
        }
        ProblemType::Other => {
            steps.push(
                "3) Processing: ten minutes of free journaling about what you feel and one \
                 small positive moment today.",
            );
            steps.push(
                "4) Follow-up: schedule a ten-minute check-in with yourself or a friend \
                 tomorrow.",
            );
        }
    }

    if risk.is_elevated() {
        steps.push(
            "5) Mental health: consider taking a PHQ-9/GAD-7 screening now and contacting a \
             clinician. For immediate danger call emergency services or a crisis line (988 in \
             the US).",
        );
    }

    let mut plan = String::from("Here is a short action plan:\n");
    for step in &steps {
        plan.push_str(step);
        plan.push('\n');
    }
    plan.push_str(WRAP_UP_CLOSING);
    plan
}
