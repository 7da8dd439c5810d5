//! Built-in records installed when no durable copy exists

use cms_core::{Media, MediaCategory, MediaType, Page, Post};
use time::{Duration, OffsetDateTime};

const ABOUT_CONTENT: &str = "
# Our School

Welcome to our institution of excellence. We are dedicated to providing quality education and fostering a nurturing environment for all students.

## Mission
To empower students with knowledge, skills, and values that will enable them to succeed in life and contribute positively to society.

## Vision
To be a leading educational institution recognized for academic excellence, innovation, and character development.

## Our Faculty
Our experienced and dedicated teachers are committed to helping each student reach their full potential through personalized attention and innovative teaching methods.
";

pub fn pages(now: OffsetDateTime) -> Vec<Page> {
    vec![Page {
        id: "1".to_string(),
        title: "About Us".to_string(),
        slug: "about".to_string(),
        content: ABOUT_CONTENT.to_string(),
        featured_image: None,
        published: true,
        created_at: now,
        updated_at: now,
    }]
}

/// Seed posts, newest first, one day apart
pub fn posts(now: OffsetDateTime) -> Vec<Post> {
    let entries = [
        (
            "1",
            "Welcome to the New School Year!",
            "welcome-new-school-year",
            "We are excited to begin another year of learning and growth.",
            "We are thrilled to welcome all students, parents, and staff to the new academic year! This year promises to be filled with exciting opportunities for learning, growth, and achievement.\n\nOur dedicated team has prepared engaging programs and activities designed to challenge and inspire every student. We look forward to working together to make this year memorable and successful.",
            "https://images.pexels.com/photos/1370296/pexels-photo-1370296.jpeg",
        ),
        (
            "2",
            "Annual Science Fair Coming Soon",
            "annual-science-fair",
            "Join us for our exciting annual science fair next month.",
            "Mark your calendars! Our annual science fair will be held next month, featuring innovative projects from students across all grades.\n\nThis event celebrates curiosity, creativity, and scientific thinking. Students will showcase their research, experiments, and discoveries. Parents and community members are invited to attend and support our young scientists.",
            "https://images.pexels.com/photos/356040/pexels-photo-356040.jpeg",
        ),
        (
            "3",
            "Parent-Teacher Conference Schedule",
            "parent-teacher-conference",
            "Schedule your parent-teacher conference today.",
            "We invite all parents to participate in our upcoming parent-teacher conferences. This is an excellent opportunity to discuss your child's progress, strengths, and areas for development.\n\nConferences will be held throughout the week. Please contact the office to schedule your appointment at a convenient time.",
            "https://images.pexels.com/photos/8613089/pexels-photo-8613089.jpeg",
        ),
    ];

    entries
        .into_iter()
        .zip(0i64..)
        .map(|((id, title, slug, excerpt, content, image), days_ago)| {
            let at = now - Duration::days(days_ago);
            Post {
                id: id.to_string(),
                title: title.to_string(),
                slug: slug.to_string(),
                content: content.to_string(),
                excerpt: excerpt.to_string(),
                featured_image: Some(image.to_string()),
                published: true,
                published_at: at,
                created_at: at,
                updated_at: at,
            }
        })
        .collect()
}

pub fn media(now: OffsetDateTime) -> Vec<Media> {
    let entries = [
        (
            "1",
            "School Building",
            "Main school building exterior",
            "https://images.pexels.com/photos/159844/cellular-education-classroom-159844.jpeg",
            MediaType::Image,
            MediaCategory::Gallery,
        ),
        (
            "2",
            "Students in Class",
            "Students engaged in learning",
            "https://images.pexels.com/photos/8364026/pexels-photo-8364026.jpeg",
            MediaType::Image,
            MediaCategory::Gallery,
        ),
        (
            "3",
            "Library",
            "School library and reading area",
            "https://images.pexels.com/photos/256417/pexels-photo-256417.jpeg",
            MediaType::Image,
            MediaCategory::Gallery,
        ),
        (
            "4",
            "Science Lab",
            "Modern science laboratory",
            "https://images.pexels.com/photos/2280547/pexels-photo-2280547.jpeg",
            MediaType::Image,
            MediaCategory::Gallery,
        ),
        (
            "5",
            "Sports Day",
            "Annual sports day event",
            "https://images.pexels.com/photos/9295/sports-match-championship-stadium.jpg",
            MediaType::Image,
            MediaCategory::Gallery,
        ),
        (
            "6",
            "Student Handbook 2024",
            "Complete guide for students and parents",
            "/downloads/student-handbook.pdf",
            MediaType::Pdf,
            MediaCategory::Downloads,
        ),
        (
            "7",
            "Homework Guidelines",
            "Best practices for completing homework",
            "/downloads/homework-guidelines.pdf",
            MediaType::Pdf,
            MediaCategory::Downloads,
        ),
    ];

    entries
        .into_iter()
        .map(|(id, title, description, file_url, file_type, category)| Media {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            file_url: file_url.to_string(),
            file_type,
            file_size: None,
            mime_type: None,
            category,
            created_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::views::{ABOUT_SLUG, media_in_category, page_by_slug};
    use cms_core::{Block, parse_content};
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2024-09-01 08:00 UTC);

    #[test]
    fn test_about_page_renders_sections() {
        let pages = pages(NOW);
        let about = page_by_slug(&pages, ABOUT_SLUG).unwrap();
        let blocks = parse_content(&about.content);

        assert_eq!(blocks[0], Block::Heading1("Our School".to_string()));
        let sections: Vec<&str> = blocks
            .iter()
            .filter(|b| matches!(b, Block::Heading2(_)))
            .map(Block::text)
            .collect();
        assert_eq!(sections, vec!["Mission", "Vision", "Our Faculty"]);
    }

    #[test]
    fn test_posts_are_newest_first() {
        let posts = posts(NOW);
        assert_eq!(posts.len(), 3);
        assert!(posts.is_sorted_by(|a, b| a.published_at > b.published_at));
        assert_eq!(posts[1].published_at, NOW - Duration::days(1));
    }

    #[test]
    fn test_media_categories() {
        let media = media(NOW);
        assert_eq!(media_in_category(&media, MediaCategory::Gallery).len(), 5);
        assert_eq!(media_in_category(&media, MediaCategory::Downloads).len(), 2);
    }
}
