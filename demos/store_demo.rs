//! Walk through the bounded URL store on the console
//!
//! Run with: cargo run --example store_demo

use url_piler::persist;
use url_piler::store::BoundedUrlStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== URL Piler store demo ===\n");

    let mut queue = BoundedUrlStore::new(2)?;
    let dropped = [
        "https://a.example",
        "https://a.example",
        "https://b.example",
        "https://c.example",
    ];
    for url in dropped {
        println!("  add {:<20} -> {:?}", url, queue.add(url));
    }
    println!("Queue: {}/{}", queue.len(), queue.capacity());
    println!("Front: {}", queue.remove_front()?);

    let lines: Vec<String> = (1..=7).map(|i| format!("https://site.example/{}", i)).collect();
    let mut slots = BoundedUrlStore::new(5)?;
    slots.load_from_lines(&lines);
    println!("\nLoaded {} lines, capacity is now {}", slots.len(), slots.capacity());
    for (index, slot) in slots.slots().iter().enumerate() {
        println!("  [{:>2}] {}", index, slot.unwrap_or("-"));
    }

    let path = std::env::temp_dir().join("url_piler_demo.txt");
    persist::write_urls(&path, &slots.serialize_to_lines())?;
    println!("\nSaved to {}", path.display());
    println!("Read back {} URLs", persist::read_urls(&path)?.len());

    Ok(())
}
