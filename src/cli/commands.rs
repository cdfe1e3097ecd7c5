use crate::app::{AppContext, Result};
use crate::comments::CommentsWidget;
use crate::domain::{PostPage, PostSummary};
use crate::normalizer::format_publication_date;
use crate::reading_time;

pub async fn list_posts(ctx: &AppContext, pages: Option<usize>) -> Result<()> {
    let mut state = ctx.cms.open_feed(ctx.config.feed.dedupe_ids).await?;

    for post in state.items() {
        print_summary(post);
    }

    let mut loaded = 0;
    while state.has_more() && pages.map_or(true, |limit| loaded < limit) {
        let before = state.len();
        ctx.cms.load_more(&mut state).await?;
        for post in &state.items()[before..] {
            print_summary(post);
        }
        loaded += 1;
    }

    if state.has_more() {
        println!("({} posts shown, more available)", state.len());
    } else {
        println!("({} posts)", state.len());
    }

    Ok(())
}

pub async fn show_post(ctx: &AppContext, uid: &str, with_comments: bool) -> Result<()> {
    let page = ctx.cms.post_page(uid).await?;
    print_post(&page);

    if with_comments {
        match CommentsWidget::new(&ctx.config.comments).embed_html() {
            Some(html) => {
                println!();
                println!("{}", html);
            }
            None => eprintln!("Comments are not configured"),
        }
    }

    Ok(())
}

pub async fn list_paths(ctx: &AppContext, limit: Option<u32>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.api.paths_limit);
    let uids = ctx.cms.post_uids(limit).await?;

    for uid in uids {
        println!("/post/{}", uid);
    }

    Ok(())
}

fn print_summary(post: &PostSummary) {
    println!("{}", post.display_title());
    if !post.subtitle.is_empty() {
        println!("  {}", post.subtitle);
    }
    println!(
        "  {} | {} | {}",
        format_publication_date(post.published_at.as_ref()),
        post.author,
        post.path()
    );
    println!();
}

fn print_post(page: &PostPage) {
    let post = &page.post;
    let summary = post.summary();

    println!("{}", summary.display_title());
    println!("{}", summary.path());
    println!(
        "{} | {} | {} min",
        format_publication_date(post.published_at.as_ref()),
        post.author,
        page.reading_minutes
    );
    if let Some(banner) = &post.banner_url {
        println!("Banner: {}", banner);
    }

    for section in &post.content {
        println!();
        println!("## {}", section.heading);
        println!("{}", reading_time::plain_text(section));
    }

    println!();
    if let Some(prev) = &page.prev {
        println!("Post anterior: {} (/post/{})", prev.title, prev.uid);
    }
    if let Some(next) = &page.next {
        println!("Próximo post: {} (/post/{})", next.title, next.uid);
    }
}
