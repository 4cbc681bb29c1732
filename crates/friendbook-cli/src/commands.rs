//! CLI command implementations.

use colored::Colorize;
use friendbook_graph::{FriendBook, Recommendation};
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn load_book(path: &Path) -> Result<FriendBook> {
    if !path.exists() {
        return Err(format!(
            "no book at {} (run `friendbook new` first)",
            path.display()
        )
        .into());
    }
    tracing::debug!(path = %path.display(), "loading book");
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn save_book(book: &FriendBook, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(book)?)?;
    Ok(())
}

/// Create an empty book file.
pub fn new(path: &Path) -> Result<()> {
    if path.exists() {
        println!("{} Book already exists at {}", "✓".green(), path.display());
        return Ok(());
    }
    save_book(&FriendBook::new(), path)?;
    println!("{} Created empty book at {}", "✓".green(), path.display());
    println!(
        "  Run {} to add people",
        "friendbook add <names...>".cyan()
    );
    Ok(())
}

/// Add people to the book.
pub fn add(path: &Path, names: &[String]) -> Result<()> {
    let mut book = load_book(path)?;
    let mut changed = false;
    for name in names {
        if book.add_person(name) {
            println!("{} Added {}", "✓".green(), name.cyan());
            changed = true;
        } else {
            println!("{} {} is already in the book", "⚠".yellow(), name);
        }
    }
    if changed {
        save_book(&book, path)?;
    }
    Ok(())
}

/// List everyone in the book.
pub fn list(path: &Path) -> Result<()> {
    let book = load_book(path)?;
    let people = book.people();
    if people.is_empty() {
        println!("The book is empty");
        return Ok(());
    }
    for (id, name) in people.iter().enumerate() {
        println!("  {:>3}  {}", id, name);
    }
    println!("\n{} people", people.len());
    Ok(())
}

/// Record a friendship.
pub fn friend(path: &Path, name1: &str, name2: &str) -> Result<()> {
    let mut book = load_book(path)?;
    if book.set_friend(name1, name2)? {
        save_book(&book, path)?;
        println!(
            "{} {} and {} are now friends",
            "✓".green(),
            name1.cyan(),
            name2.cyan()
        );
    } else {
        println!("{} and {} were already friends", name1, name2);
    }
    Ok(())
}

/// Remove a friendship.
pub fn unfriend(path: &Path, name1: &str, name2: &str) -> Result<()> {
    let mut book = load_book(path)?;
    if book.remove_friend(name1, name2)? {
        save_book(&book, path)?;
        println!(
            "{} {} and {} are no longer friends",
            "✓".green(),
            name1.cyan(),
            name2.cyan()
        );
    } else {
        println!("{} and {} were not friends", name1, name2);
    }
    Ok(())
}

/// Check whether two people are friends.
pub fn check(path: &Path, name1: &str, name2: &str) -> Result<()> {
    let book = load_book(path)?;
    if book.is_friend(name1, name2)? {
        println!("{} and {} are friends", name1.cyan(), name2.cyan());
    } else {
        println!("{} and {} are not friends", name1, name2);
    }
    Ok(())
}

/// Show a person's friend count.
pub fn count(path: &Path, name: &str) -> Result<()> {
    let book = load_book(path)?;
    let count = book.friend_count(name)?;
    let noun = if count == 1 { "friend" } else { "friends" };
    println!("{} has {} {}", name.cyan(), count, noun);
    Ok(())
}

/// List the mutual friends of two people.
pub fn mutual(path: &Path, name1: &str, name2: &str) -> Result<()> {
    let book = load_book(path)?;
    let mutuals = book.mutual_friends(name1, name2);
    if mutuals.is_empty() {
        println!("{} and {} have no mutual friends", name1, name2);
        return Ok(());
    }
    println!("Mutual friends of {} and {}:", name1.cyan(), name2.cyan());
    for name in mutuals {
        println!("  {}", name);
    }
    Ok(())
}

/// Print friend recommendations for a person.
///
/// The header prints before the name is checked and each row uses a
/// fixed-width layout, matching the original console format.
pub fn recommend(path: &Path, name: &str) -> Result<()> {
    let book = load_book(path)?;
    println!("{}'s friend recommendations", name);
    for rec in book.friend_recommendations(name) {
        println!("{}", format_recommendation(&rec));
    }
    Ok(())
}

fn format_recommendation(rec: &Recommendation) -> String {
    format!("\t{:<20}{:>4} mutual friends", rec.name, rec.mutual_count)
}

/// Show book statistics.
pub fn status(path: &Path) -> Result<()> {
    let book = load_book(path)?;
    let stats = book.stats();
    println!("{}", "Book status".cyan());
    println!("  People:      {}", stats.people);
    println!("  Friendships: {}", stats.friendships);
    println!("  Capacity:    {}", stats.capacity);
    Ok(())
}

/// Export the book to a standalone JSON file.
pub fn export(path: &Path, output: &Path) -> Result<()> {
    let book = load_book(path)?;
    let people = book.people();

    let mut friendships = Vec::new();
    for (i, name1) in people.iter().enumerate() {
        for name2 in &people[i + 1..] {
            if book.is_friend(name1, name2)? {
                friendships.push(serde_json::json!({
                    "source": name1,
                    "target": name2,
                }));
            }
        }
    }

    let export = serde_json::json!({
        "version": "1.0",
        "stats": {
            "peopleCount": people.len(),
            "friendshipCount": friendships.len(),
        },
        "people": people,
        "friendships": friendships,
    });

    fs::write(output, serde_json::to_string_pretty(&export)?)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_line_format() {
        let rec = Recommendation {
            name: "Dave".to_owned(),
            mutual_count: 3,
        };
        // Name padded to 20 columns, count right-justified to 4.
        assert_eq!(
            format_recommendation(&rec),
            "\tDave                   3 mutual friends"
        );
    }

    #[test]
    fn test_recommendation_line_format_long_name() {
        // Names longer than the field keep their full length.
        let rec = Recommendation {
            name: "Bartholomew Montgomery".to_owned(),
            mutual_count: 12,
        };
        assert_eq!(
            format_recommendation(&rec),
            "\tBartholomew Montgomery  12 mutual friends"
        );
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");

        let mut book = FriendBook::new();
        book.add_person("Alice");
        book.add_person("Bob");
        book.set_friend("Alice", "Bob").unwrap();
        save_book(&book, &path).unwrap();

        let loaded = load_book(&path).unwrap();
        assert_eq!(loaded.people(), vec!["Alice", "Bob"]);
        assert_eq!(loaded.is_friend("Alice", "Bob"), Ok(true));
    }

    #[test]
    fn test_load_missing_book_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(load_book(&missing).is_err());
    }
}
