//! Built-in project catalog contents.

use crate::model::project::ProjectRecord;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Returns the portfolio projects in display order.
pub fn seed_records() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "food-delivery".to_string(),
            title: "Food Delivery App".to_string(),
            description: "Full-stack MERN app with auth, order flow, and payments. Focus on \
                          clean UI, API design, and deployment."
                .to_string(),
            image: "/assets/images/Screenshot 2025-11-06 154236.png".to_string(),
            stack: strings(&["React", "Node.js", "Express", "MongoDB", "Stripe"]),
            live_url: Some("https://food-delivery-appfrontend.onrender.com".to_string()),
            repo_url: None,
            highlights: strings(&["JWT Auth", "Stripe Checkout", "Responsive UI"]),
            tags: strings(&["fullstack", "mern", "featured"]).into_iter().collect(),
            year: 2024,
        },
        ProjectRecord {
            id: "notes-app".to_string(),
            title: "Notes App Cloud Application".to_string(),
            description: "Full-Stack app Developed and deployed a production-ready SaaS \
                          note-taking application featuring markdown support, real-time \
                          synchronization,"
                .to_string(),
            image: "/assets/images/Screenshot 2025-11-28 222659.png".to_string(),
            stack: strings(&["React", "TypeScript", "Node.js", "MySQL"]),
            live_url: Some("https://notes-app-sigma-opal.vercel.app/".to_string()),
            repo_url: None,
            highlights: strings(&["Admin CMS", "Auth", "Video Library"]),
            tags: strings(&["fullstack", "mern", "featured"]).into_iter().collect(),
            year: 2024,
        },
    ]
}
