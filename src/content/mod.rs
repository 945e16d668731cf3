//! The static marketing dataset: profile, work history, projects, skills,
//! testimonials, and service offerings.
//!
//! The source pages re-declared these arrays inline in every component; here
//! they are one immutable structure built once at startup and shared behind an
//! `Arc` by the HTTP surface and the CLI.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::inquiries::ServiceType;

#[derive(Debug, Clone, Serialize)]
pub struct DeveloperProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One entry of the work history timeline.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub responsibilities: Vec<&'static str>,
    pub technologies: Vec<&'static str>,
}

/// A case study shown on the projects page.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectShowcase {
    pub title: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub stack: Vec<&'static str>,
}

/// Self-assessed proficiency, 0-100.
#[derive(Debug, Clone, Serialize)]
pub struct SkillRating {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// An engagement model card; `service_type` ties the card to the matching
/// inquiry form category.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub service_type: ServiceType,
    pub tag: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub engagement: &'static str,
    pub popular: bool,
    pub features: Vec<&'static str>,
}

/// The full seed dataset.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub profile: DeveloperProfile,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectShowcase>,
    pub technical_skills: Vec<SkillRating>,
    pub soft_skills: Vec<&'static str>,
    pub testimonials: Vec<Testimonial>,
    pub offerings: Vec<ServiceOffering>,
}

/// Compact counts for the CLI and smoke checks.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSummary {
    pub experience_entries: usize,
    pub projects: usize,
    pub technical_skills: usize,
    pub testimonials: usize,
    pub offerings: usize,
}

impl SiteContent {
    pub fn standard() -> Self {
        Self {
            profile: profile(),
            experience: experience_entries(),
            projects: project_showcases(),
            technical_skills: technical_skills(),
            soft_skills: vec![
                "Communication",
                "Teamwork & Collaboration",
                "Problem-Solving",
                "Adaptability",
                "Attention to Detail",
            ],
            testimonials: testimonials(),
            offerings: service_offerings(),
        }
    }

    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            experience_entries: self.experience.len(),
            projects: self.projects.len(),
            technical_skills: self.technical_skills.len(),
            testimonials: self.testimonials.len(),
            offerings: self.offerings.len(),
        }
    }

    pub fn offering_for(&self, service_type: ServiceType) -> Option<&ServiceOffering> {
        self.offerings
            .iter()
            .find(|offering| offering.service_type == service_type)
    }
}

fn profile() -> DeveloperProfile {
    DeveloperProfile {
        name: "Yogesh Bhavsar",
        title: "Senior Frontend Architect",
        tagline: "I fix the technical problems that are costing you money.",
        links: vec![
            SocialLink {
                label: "LinkedIn",
                url: "https://linkedin.com/in/yogeshbhavsarui",
            },
            SocialLink {
                label: "GitHub",
                url: "https://github.com/yogeshu",
            },
        ],
    }
}

fn experience_entries() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "MilliPixels Interactive",
            role: "Front-End Developer",
            duration: "Jan 2022 - Present",
            responsibilities: vec![
                "Developed and maintained responsive web applications using React and Redux.",
                "Collaborated with UI/UX designers to implement pixel-perfect interfaces.",
                "Optimized application performance and improved Lighthouse scores.",
                "Integrated third-party APIs and services.",
            ],
            technologies: vec!["React", "Redux", "JavaScript", "TailwindCSS", "REST APIs"],
        },
        ExperienceEntry {
            company: "Jio (via Quest Global)",
            role: "Software Engineer",
            duration: "Jul 2020 - Dec 2021",
            responsibilities: vec![
                "Contributed to the development of large-scale enterprise applications.",
                "Worked in an Agile environment, participating in sprints and daily stand-ups.",
                "Focused on front-end components and state management.",
                "Performed code reviews and mentored junior developers.",
            ],
            technologies: vec!["React", "JavaScript ES6+", "Styled Components", "Webpack"],
        },
        ExperienceEntry {
            company: "Tata Institute of Social Sciences",
            role: "Project Intern",
            duration: "May 2019 - Jul 2019",
            responsibilities: vec![
                "Assisted in developing a web portal for research data management.",
                "Gained experience in full-stack development concepts.",
                "Contributed to UI design and database interactions.",
            ],
            technologies: vec!["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        },
    ]
}

fn project_showcases() -> Vec<ProjectShowcase> {
    vec![
        ProjectShowcase {
            title: "Gau Samriddhi Platform",
            challenge: "Expand digital presence across rural India with high-performance lead \
                        generation for users on low-bandwidth devices.",
            solution: "Built a statically generated site for instant load times, integrated the \
                       client design system, and optimized assets for rural 4G networks.",
            stack: vec!["Next.js", "React", "Design System", "SEO"],
        },
        ProjectShowcase {
            title: "Technical Analysis Engine",
            challenge: "Visualize dense stock market data (candlesticks, RSI, relative strength) \
                        on the web without crashing the browser.",
            solution: "Custom charting components backed by financial domain modeling and careful \
                       render batching.",
            stack: vec!["D3.js", "React Performance", "Financial Modeling"],
        },
        ProjectShowcase {
            title: "Resume Generator",
            challenge: "Let non-technical users produce polished, exportable resumes without a \
                        backend round-trip per edit.",
            solution: "Built a template-based generator with hosted auth and client-side PDF \
                       export logic.",
            stack: vec!["React", "Framer Motion", "Firebase", "PDF Gen"],
        },
    ]
}

fn technical_skills() -> Vec<SkillRating> {
    vec![
        SkillRating { name: "JavaScript (ES6+)", level: 90 },
        SkillRating { name: "React", level: 95 },
        SkillRating { name: "Redux / Redux Toolkit", level: 85 },
        SkillRating { name: "Next.js", level: 70 },
        SkillRating { name: "HTML5", level: 95 },
        SkillRating { name: "CSS3 / SASS", level: 90 },
        SkillRating { name: "TailwindCSS", level: 88 },
        SkillRating { name: "Git / GitHub", level: 85 },
        SkillRating { name: "REST APIs", level: 80 },
        SkillRating { name: "Webpack / Vite", level: 75 },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Arjun Mehta",
            role: "Founder, EdTech Startup",
            quote: "Yogesh took our idea from Figma mockups to a working product in 4 weeks. The \
                    performance is incredible - our bounce rate dropped by 40%.",
        },
        Testimonial {
            name: "Priya Sharma",
            role: "CEO, Healthcare SaaS",
            quote: "We were stuck with a half-built app and a developer who vanished. Yogesh \
                    cleaned up the mess, finished the project, and it's been running flawlessly \
                    for 8 months.",
        },
        Testimonial {
            name: "Rahul Verma",
            role: "Serial Entrepreneur",
            quote: "Most developers either understand business OR they understand code. Yogesh \
                    gets both. He asks about conversion rates before touching CSS.",
        },
    ]
}

fn service_offerings() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            service_type: ServiceType::Audit,
            tag: "FIX",
            title: "Code/UI Audit",
            price: "$299",
            engagement: "One-Time Check",
            popular: false,
            features: vec![
                "Review your existing code",
                "Find performance issues",
                "UI/UX improvement list",
                "Video walkthrough of fixes",
            ],
        },
        ServiceOffering {
            service_type: ServiceType::MvpBuild,
            tag: "BUILD",
            title: "Web App Development",
            price: "Project Based",
            engagement: "Most Popular",
            popular: true,
            features: vec![
                "React/Next.js application",
                "Mobile responsive",
                "Admin dashboard",
                "Deployment setup",
            ],
        },
        ServiceOffering {
            service_type: ServiceType::Retainer,
            tag: "PARTNER",
            title: "Dedicated Developer",
            price: "Monthly",
            engagement: "Retainer",
            popular: false,
            features: vec![
                "Ongoing feature development",
                "Bug fixes & maintenance",
                "Direct Slack/WhatsApp access",
                "Flexible hours",
            ],
        },
    ]
}

/// Router builder exposing the read-only content endpoints.
pub fn content_router(content: Arc<SiteContent>) -> Router {
    Router::new()
        .route("/api/v1/content", get(content_handler))
        .route("/api/v1/content/services", get(services_handler))
        .with_state(content)
}

async fn content_handler(State(content): State<Arc<SiteContent>>) -> Json<SiteContent> {
    Json((*content).clone())
}

async fn services_handler(State(content): State<Arc<SiteContent>>) -> Json<Vec<ServiceOffering>> {
    Json(content.offerings.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_section() {
        let content = SiteContent::standard();
        let summary = content.summary();
        assert_eq!(summary.experience_entries, 3);
        assert_eq!(summary.projects, 3);
        assert_eq!(summary.technical_skills, 10);
        assert_eq!(summary.testimonials, 3);
        assert_eq!(summary.offerings, 3);
    }

    #[test]
    fn skill_levels_stay_within_scale() {
        let content = SiteContent::standard();
        assert!(content
            .technical_skills
            .iter()
            .all(|skill| skill.level <= 100));
    }

    #[test]
    fn exactly_one_offering_is_highlighted() {
        let content = SiteContent::standard();
        let popular = content
            .offerings
            .iter()
            .filter(|offering| offering.popular)
            .count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn offerings_map_to_inquiry_categories() {
        let content = SiteContent::standard();
        for service_type in [ServiceType::Audit, ServiceType::MvpBuild, ServiceType::Retainer] {
            assert!(content.offering_for(service_type).is_some());
        }
        assert!(content.offering_for(ServiceType::Other).is_none());
    }
}
