//! The services catalogue.

use serde::Serialize;

/// One service offering, rendered on the landing and services pages.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    /// URL-friendly identifier.
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line summary for the landing page cards.
    pub summary: &'static str,
    /// Long-form description for the services page.
    pub description: &'static str,
}

/// Returns the full services catalogue in display order.
pub fn services() -> Vec<Service> {
    vec![
        Service {
            slug: "workflow-automation",
            title: "Workflow Automation",
            summary: "Intelligent automation of repetitive tasks and complex processes.",
            description: "Our workflow automation service transforms business operations \
                by streamlining repetitive tasks and multi-step processes. We map your \
                existing workflows to find bottlenecks, then build custom automations \
                covering everything from data processing and document handling to \
                cross-department coordination.",
        },
        Service {
            slug: "enterprise-consulting",
            title: "Enterprise Consulting",
            summary: "Practical guidance from assessment through scaled rollout.",
            description: "Our consulting practice helps organizations navigate the \
                automation landscape with clarity. We assess current operations, \
                identify the challenges where automation delivers measurable impact, \
                and support execution end to end: vendor evaluation, pilot design, \
                outcome measurement, and scaling the solutions that prove themselves.",
        },
        Service {
            slug: "chatbot-development",
            title: "Chatbot Development",
            summary: "Conversational assistants that understand intent, not scripts.",
            description: "We build conversational assistants for customer service and \
                internal operations. Rather than script-following bots, our assistants \
                understand natural language, recognize user intent, and respond in \
                context, handing off to a person whenever the conversation calls for one.",
        },
    ]
}
