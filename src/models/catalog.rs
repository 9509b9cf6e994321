//! Fixed mock content displayed by the pages.

use super::{Author, PostStats, PostStatus, PostSummary};

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    category: &str,
    author: &str,
    date: &str,
    read_time: &str,
    status: PostStatus,
    stats: PostStats,
) -> PostSummary {
    PostSummary {
        id: id.into(),
        title: title.into(),
        excerpt: excerpt.into(),
        category: category.into(),
        author: author.into(),
        date: date.into(),
        read_time: read_time.into(),
        status,
        stats,
    }
}

fn stats(views: Option<u32>, comments: u32, likes: u32) -> PostStats {
    PostStats {
        views,
        comments,
        likes,
    }
}

pub fn posts() -> Vec<PostSummary> {
    vec![
        post(
            "1",
            "The Future of Web Development: Trends to Watch in 2025",
            "Explore the cutting-edge technologies and methodologies that are shaping the future of web development.",
            "Technology",
            "Sarah Johnson",
            "Nov 28, 2025",
            "8 min",
            PostStatus::Published,
            stats(Some(3200), 24, 156),
        ),
        post(
            "2",
            "Building Scalable React Applications",
            "Learn the best practices and patterns for creating maintainable React applications at scale.",
            "Development",
            "Michael Chen",
            "Nov 27, 2025",
            "6 min",
            PostStatus::Published,
            stats(Some(2800), 18, 142),
        ),
        post(
            "3",
            "Design Systems: A Complete Guide",
            "Everything you need to know about creating and maintaining effective design systems.",
            "Design",
            "Emily Davis",
            "Nov 26, 2025",
            "10 min",
            PostStatus::Draft,
            stats(None, 0, 0),
        ),
        post(
            "4",
            "Mastering TypeScript: Advanced Techniques",
            "Deep dive into advanced TypeScript features and how to leverage them in your projects.",
            "Development",
            "David Wilson",
            "Nov 25, 2025",
            "7 min",
            PostStatus::Published,
            stats(Some(2100), 15, 98),
        ),
        post(
            "5",
            "The Art of Technical Writing",
            "Tips and strategies for writing clear, concise, and effective technical documentation.",
            "Writing",
            "Jessica Brown",
            "Nov 24, 2025",
            "5 min",
            PostStatus::Draft,
            stats(None, 0, 0),
        ),
        post(
            "6",
            "Performance Optimization for Modern Web Apps",
            "Proven techniques to make your web applications faster and more efficient.",
            "Performance",
            "Alex Martinez",
            "Nov 23, 2025",
            "9 min",
            PostStatus::Published,
            stats(Some(1900), 12, 87),
        ),
    ]
}

pub fn published_posts() -> Vec<PostSummary> {
    posts().into_iter().filter(PostSummary::is_published).collect()
}

/// Looks up a post for the detail page. An empty or unknown id shows the
/// first post.
pub fn post_or_first(id: &str) -> PostSummary {
    let mut all = posts();
    match all.iter().position(|p| p.id == id) {
        Some(idx) => all.swap_remove(idx),
        None => all.swap_remove(0),
    }
}

pub fn featured_author() -> Author {
    Author {
        name: "Sarah Johnson".into(),
        username: "@sarahjohnson".into(),
        bio: "Senior Software Engineer and Tech Writer. Passionate about web technologies and developer experience. Sharing insights about React, TypeScript, and modern web development.".into(),
        followers: "12.5K".into(),
        posts: 42,
    }
}

pub fn categories() -> [&'static str; 6] {
    ["All", "Technology", "Development", "Design", "Writing", "Performance"]
}
