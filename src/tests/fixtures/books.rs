// Record seeding helpers shared by handler and e2e tests.

use crate::modules::reviews::adapters::outbound::book_store::BookStore;
use crate::modules::reviews::core::book::BookDetails;

pub fn details(title: &str, author: &str) -> BookDetails {
    BookDetails {
        title: title.to_string(),
        author: author.to_string(),
        purchase_link: format!("https://shop.example.com/{}", title.to_lowercase().replace(' ', "-")),
        page_count: Some(320),
        cover_image_ref: String::new(),
    }
}

/// Inserts one book per title for `year` and returns their ids in order.
pub async fn seed_books(store: &impl BookStore, year: i32, titles: &[&str]) -> Vec<String> {
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        let record = store
            .insert(year, details(title, "Autore Sconosciuto"))
            .await
            .expect("seed insert failed");
        ids.push(record.id);
    }
    ids
}
