use bayesroute::{Classifier, ClassifierError};
use env_logger::{Builder, Env};
use std::sync::Arc;

// Initialize test logger
fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

const CORPUS: &[(&str, &str)] = &[
    ("animals", "кот сидит на окне"),
    ("animals", "собака лает во дворе"),
    ("finance", "акция выросла на бирже"),
    ("finance", "банк повысил ставку"),
];

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_and_writers() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let classifier = Arc::new(Classifier::new());
    classifier.train("кот", "animals")?;

    let mut tasks = Vec::new();
    for round in 0..8 {
        for (category, text) in CORPUS {
            let classifier = Arc::clone(&classifier);
            tasks.push(tokio::task::spawn_blocking(move || {
                classifier.train(text, category)
            }));
        }
        let classifier = Arc::clone(&classifier);
        tasks.push(tokio::task::spawn_blocking(move || {
            let (label, confidence) = classifier.classify("кот")?;
            assert!(confidence > 0.0, "round {}: {}", round, label);
            Ok::<(), ClassifierError>(())
        }));
    }

    for task in tasks {
        task.await??;
    }

    assert_eq!(classifier.training_count("animals")?, 1 + 8 * 2);
    assert_eq!(classifier.training_count("finance")?, 8 * 2);
    assert_eq!(classifier.count_in_category("кот", "animals")?, 1 + 8);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_readers_see_whole_training_calls() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let classifier = Arc::new(Classifier::new());

    let writer = {
        let classifier = Arc::clone(&classifier);
        tokio::task::spawn_blocking(move || -> Result<(), ClassifierError> {
            for _ in 0..200 {
                classifier.train("альфа бета гамма", "greek")?;
            }
            Ok(())
        })
    };

    let reader = {
        let classifier = Arc::clone(&classifier);
        tokio::task::spawn_blocking(move || -> Result<(), ClassifierError> {
            for _ in 0..200 {
                // Each call records three tokens and one event together
                let info = classifier.info()?;
                if info.training_events == 0 {
                    assert_eq!(info.vocabulary_size, 0);
                } else {
                    assert_eq!(info.vocabulary_size, 3);
                }
                if let Ok((_, confidence)) = classifier.classify("альфа") {
                    assert!(confidence > 0.0);
                }
            }
            Ok(())
        })
    };

    writer.await??;
    reader.await??;
    assert_eq!(classifier.training_count("greek")?, 200);
    Ok(())
}

#[test]
fn test_routing_corpus() -> Result<(), ClassifierError> {
    init();
    let mut builder = Classifier::builder();
    for (category, text) in CORPUS {
        builder = builder.train(*text, *category);
    }
    let classifier = builder.build()?;

    assert_eq!(classifier.classify("собака и кот")?.0, "animals");
    assert_eq!(classifier.classify("банк и биржа")?.0, "finance");

    let (scores, best) = classifier.get_prob("лает")?;
    assert_eq!(best.as_deref(), Some("animals"));
    assert_eq!(scores.len(), 2);
    Ok(())
}
