//! Resource directory commands

use back2life::Economy;
use back2life::economy::VisitOutcome;
use back2life::resources;

use super::print_unlocked;

/// Print the directory, marking links already visited
pub fn resources_command(economy: &Economy, search: Option<&str>) {
    let categories = resources::search(search.unwrap_or(""));
    if categories.is_empty() {
        println!("No resources found.");
        return;
    }

    let visited = economy.rewards().visited_resources();
    for category in categories {
        println!("{} {}", category.icon, category.title);
        for link in category.links {
            let mark = if visited.iter().any(|u| u == link.url) { "✓" } else { " " };
            println!("  {} {}", mark, link.title);
            println!("      {}", link.description);
            println!("      {}", link.url);
        }
        println!();
    }
}

/// Visit a listed resource; the first visit to each URL pays
pub fn visit_command(economy: &Economy, url: &str) {
    if !resources::is_listed(url) {
        println!("{} is not in the resource directory.", url);
        return;
    }

    println!("Opening {}", url);
    match economy.rewards().visit_resource(url) {
        VisitOutcome::Rewarded(reward) => {
            println!(
                "+{} coins for exploring a new resource! Balance: {}",
                reward.amount, reward.balance
            );
            print_unlocked(&reward.unlocked);
        }
        VisitOutcome::AlreadyVisited => {}
    }
}
