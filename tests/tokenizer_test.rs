use bayesroute::{mapper, predicate, StdTokenizer, StopwordTable, Tokenize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_token_multiset() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = StdTokenizer::new();
    let counts = tokenizer.word_counts("A b A")?;
    let expected: HashMap<String, usize> = [("a".to_string(), 2), ("b".to_string(), 1)].into();
    assert_eq!(counts, expected);
    Ok(())
}

#[test]
fn test_stopword_dropped_in_any_case() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = StdTokenizer::new();
    assert_eq!(tokenizer.tokens("the и cat")?, vec!["the", "cat"]);
    assert_eq!(tokenizer.tokens("И собака")?, vec!["собака"]);
    Ok(())
}

#[test]
fn test_empty_and_blank_input() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = StdTokenizer::new();
    assert!(tokenizer.tokenize("")?.next().is_none());
    assert!(tokenizer.tokens(" \t\n ")?.is_empty());
    Ok(())
}

#[test]
fn test_stream_preserves_order() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = StdTokenizer::builder()
        .with_buffer_size(2)
        .with_relay_buffer_size(1)
        .with_filters(vec![])
        .build()?;
    let words: Vec<String> = (0..1000).map(|i| format!("W{}", i)).collect();
    let tokens: Vec<String> = tokenizer.tokenize(&words.join(" "))?.collect();
    let expected: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    assert_eq!(tokens, expected);
    Ok(())
}

#[test]
fn test_streaming_before_scan_completes() -> Result<(), Box<dyn std::error::Error>> {
    let scanned = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&scanned);
    let tokenizer = StdTokenizer::builder()
        .with_buffer_size(1)
        .with_relay_buffer_size(1)
        .with_filters(vec![predicate(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })])
        .build()?;

    let text = "ветер ".repeat(5_000);
    let mut stream = tokenizer.tokenize(&text)?;
    assert_eq!(stream.next().as_deref(), Some("ветер"));
    // Backpressure keeps the filter only a few words ahead of the consumer
    assert!(scanned.load(Ordering::SeqCst) < 5_000);
    stream.finish()?;
    Ok(())
}

#[test]
fn test_abandoned_streams_do_not_leak() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = StdTokenizer::builder().with_buffer_size(1).with_relay_buffer_size(1).build()?;
    let text = "токен ".repeat(1_000);
    for _ in 0..50 {
        let mut stream = tokenizer.tokenize(&text)?;
        stream.next();
        // Dropping joins all three stages
    }
    Ok(())
}

#[test]
fn test_custom_stopword_table() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = StdTokenizer::builder()
        .with_stopwords(StopwordTable::new(["The", "of"]))
        .add_transform(mapper(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string()))
        .build()?;
    assert_eq!(tokenizer.tokens("The Lord of (the) Rings")?, vec!["lord", "the", "rings"]);
    Ok(())
}

#[test]
fn test_tokenizer_is_shareable() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = Arc::new(StdTokenizer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tokenizer = Arc::clone(&tokenizer);
            std::thread::spawn(move || tokenizer.tokens(&format!("поток {} и ветер", i)))
        })
        .collect();
    for handle in handles {
        let tokens = handle.join().unwrap()?;
        assert_eq!(tokens.len(), 3);
    }
    Ok(())
}
