#![cfg(feature = "serde")]

use duodeque::Deque;
use serde_test::{assert_tokens, Token};

#[test]
fn test_serde_empty_deque() {
    let my_deque: Deque<u32> = Deque::default();
    assert_tokens(&my_deque, &[Token::Seq { len: Some(0) }, Token::SeqEnd])
}

#[test]
fn test_serde_non_empty() {
    let mut my_deque: Deque<u32> = Deque::default();
    my_deque.push_back(1);
    my_deque.push_back(2);
    my_deque.push_back(3);
    assert_tokens(
        &my_deque,
        &[
            Token::Seq { len: Some(3) },
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::SeqEnd,
        ],
    )
}

#[test]
fn test_serde_both_ends() {
    let mut my_deque: Deque<u32> = Deque::new();
    for i in (1..=6).rev() {
        my_deque.push_front(i);
    }
    for i in 7..=12 {
        my_deque.push_back(i);
    }
    assert_tokens(
        &my_deque,
        &[
            Token::Seq { len: Some(12) },
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::U32(4),
            Token::U32(5),
            Token::U32(6),
            Token::U32(7),
            Token::U32(8),
            Token::U32(9),
            Token::U32(10),
            Token::U32(11),
            Token::U32(12),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_vec_to_deque_serde() {
    let plain: Vec<u32> = vec![1, 2, 3, 4];
    let json = serde_json::to_string(&plain).unwrap();
    let deque: Deque<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        plain, deque,
        "Deserialized Deque is not identical to the original Vec"
    );
}

#[test]
fn test_deque_to_vec_serde() {
    let mut deque: Deque<u32> = Deque::new();
    deque.push_back(3);
    deque.push_back(4);
    deque.push_front(2);
    deque.push_front(1);
    let json = serde_json::to_string(&deque).unwrap();
    assert_eq!(json, "[1,2,3,4]");
    let plain: Vec<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        deque, plain,
        "Deserialized Vec is not identical to the original Deque"
    );
}
