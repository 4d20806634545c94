use crate::listings::RawListingRecord;
use chrono::{DateTime, SecondsFormat, Utc};

/// Hand-curated projects shown when the live listing cannot be fetched.
pub struct FallbackProvider {
    profile_url: String,
    site_url: Option<String>,
}

impl FallbackProvider {
    pub fn new(profile_url: impl Into<String>) -> Self {
        Self {
            profile_url: profile_url.into(),
            site_url: None,
        }
    }

    /// Homepage of the portfolio project itself.
    pub fn with_site_url(mut self, site_url: Option<String>) -> Self {
        self.site_url = site_url;
        self
    }

    /// The fallback set, stamped with the current time.
    pub fn fallback_listing(&self) -> Vec<RawListingRecord> {
        self.listing_at(Utc::now())
    }

    pub fn listing_at(&self, now: DateTime<Utc>) -> Vec<RawListingRecord> {
        let updated_at = now.to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut records = vec![
            self.record(
                1,
                "Modern Portfolio Website",
                "Animated 3D portfolio website built with React, Three.js, and Framer Motion",
                "JavaScript",
                (15, 3),
                &["react", "threejs", "portfolio", "framer-motion"],
            ),
            self.record(
                2,
                "AI Chat Application",
                "Real-time chat application with AI integration using modern web technologies",
                "Python",
                (8, 2),
                &["python", "ai", "chatbot", "machine-learning"],
            ),
            self.record(
                3,
                "E-commerce Dashboard",
                "Admin dashboard for e-commerce platform with analytics and management features",
                "TypeScript",
                (12, 4),
                &["typescript", "react", "dashboard", "ecommerce"],
            ),
        ];
        for rec in &mut records {
            rec.updated_at = Some(updated_at.clone());
        }
        records[0].homepage = self.site_url.clone();
        records
    }

    fn record(
        &self,
        id: u64,
        name: &str,
        description: &str,
        language: &str,
        (stars, forks): (u64, u64),
        topics: &[&str],
    ) -> RawListingRecord {
        RawListingRecord {
            id: Some(id),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            html_url: Some(self.profile_url.clone()),
            homepage: None,
            language: Some(language.to_string()),
            stargazers_count: Some(stars),
            forks_count: Some(forks),
            fork: false,
            created_at: None,
            updated_at: None,
            topics: Some(topics.iter().map(|t| t.to_string()).collect()),
        }
    }
}
