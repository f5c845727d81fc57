use anyhow::{bail, Context, Result};
use bayesroute::{Classifier, ClassifierError};
use clap::Parser;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Training file with one `category<TAB>text` pair per line
    #[arg(short, long)]
    train: Option<PathBuf>,

    /// Capacity of the tokenizer's source queue
    #[arg(short, long, default_value_t = bayesroute::DEFAULT_SOURCE_BUFFER)]
    buffer_size: usize,

    /// Texts to classify; a built-in set is used when none are given
    texts: Vec<String>,
}

const SAMPLE_CORPUS: &[(&str, &str)] = &[
    ("animals", "кот сидит на окне"),
    ("animals", "собака лает во дворе"),
    ("animals", "кошка поймала мышь"),
    ("finance", "акция выросла на бирже"),
    ("finance", "банк повысил ставку по кредиту"),
    ("finance", "курс рубля упал на торгах"),
    ("sports", "команда выиграла матч в овертайме"),
    ("sports", "футболист забил гол в финале"),
];

fn load_corpus(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read training file {}", path.display()))?;
    let mut corpus = Vec::new();
    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((category, text)) = line.split_once('\t') else {
            bail!("Line {} of {} has no tab separator", n + 1, path.display());
        };
        corpus.push((category.to_string(), text.to_string()));
    }
    Ok(corpus)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Text Classifier Demo ===");
    let start_time = Instant::now();

    let corpus = match &args.train {
        Some(path) => load_corpus(path)?,
        None => SAMPLE_CORPUS
            .iter()
            .map(|(category, text)| (category.to_string(), text.to_string()))
            .collect(),
    };

    let mut builder = Classifier::builder().with_pipeline_config(bayesroute::PipelineConfig {
        source_buffer: args.buffer_size,
        ..Default::default()
    })?;
    for (category, text) in corpus {
        builder = builder.train(text, category);
    }
    let classifier = builder.build()?;

    let train_time = start_time.elapsed();
    let model = classifier.info()?;
    info!(
        "=== Trained {} categories, {} tokens (took {:.2?}) ===",
        model.num_categories, model.vocabulary_size, train_time
    );

    let test_inputs: Vec<String> = if args.texts.is_empty() {
        vec![
            "кот и акция".to_string(),
            "собака поймала кошку".to_string(),
            "банк и курс рубля".to_string(),
            "гол в финале".to_string(),
            "совершенно незнакомые слова".to_string(),
        ]
    } else {
        args.texts
    };

    let classify_start = Instant::now();
    for (i, text) in test_inputs.iter().enumerate() {
        info!("Test {}/{}: {}", i + 1, test_inputs.len(), text);
        process_input(&classifier, text)?;
    }

    info!("=== Demo Complete ===");
    info!("Training time: {:.2?}", train_time);
    info!("Classification time: {:.2?}", classify_start.elapsed());
    Ok(())
}

fn process_input(classifier: &Classifier, text: &str) -> Result<()> {
    match classifier.classify(text) {
        Ok((class, confidence)) => {
            let (scores, _) = classifier.get_prob(text)?;
            let mut scores: Vec<_> = scores.into_iter().collect();
            scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            println!("\nInput: {}", text);
            println!("  Predicted class: {} (confidence {:.3e})", class, confidence);
            println!("  Scores (sorted):");
            for (label, score) in scores {
                println!("    {}: {:.3e}", label, score);
            }
        }
        Err(ClassifierError::NoMatch) | Err(ClassifierError::EmptyInput) => {
            println!("\nInput: {:?}", text);
            println!("  No category matched");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
