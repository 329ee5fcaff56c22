use lingo_core::{Language, LanguageModels};

use super::{load_settings, ResourceOptions};

fn load_models(opts: &ResourceOptions) -> LanguageModels {
    let settings = load_settings(opts);
    die!(LanguageModels::load(&settings), "Error: {}")
}

pub fn lookup(opts: &ResourceOptions, word: &str) {
    let models = load_models(opts);
    match models.dictionary().lookup(word) {
        Some(languages) => {
            let names: Vec<&str> = languages.iter().map(|l| l.label()).collect();
            println!("{word}: {}", names.join(", "));
        }
        None => println!("{word}: {}", Language::Unknown.label()),
    }
}

pub fn info(opts: &ResourceOptions) {
    let settings = load_settings(opts);
    let models = die!(LanguageModels::load(&settings), "Error: {}");

    for (language, path) in settings.languages() {
        let Some(stats) = models.stats(language) else {
            continue;
        };
        println!(
            "{:<8} {:>7} words {:>8} transitions  {}",
            language.label(),
            stats.words,
            stats.transitions,
            path.display()
        );
    }

    let dict = models.dictionary();
    let ambiguous = dict.ambiguous_words();
    println!("Dictionary: {} distinct words", dict.len());
    println!("Shared by several languages: {}", ambiguous.len());
    for (word, languages) in ambiguous.iter().take(10) {
        let names: Vec<&str> = languages.iter().map(|l| l.label()).collect();
        println!("  {word}: {}", names.join(", "));
    }
    if ambiguous.len() > 10 {
        println!("  ... and {} more", ambiguous.len() - 10);
    }
}
