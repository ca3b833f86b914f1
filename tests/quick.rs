#![cfg(not(miri))]

#[macro_use]
extern crate quickcheck;

use duodeque::Deque;

use quickcheck::Arbitrary;
use quickcheck::Gen;

use std::cmp::min;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::ops::Deref;

quickcheck! {
    fn iter(push: Vec<u32>) -> bool {
        let mut vs = Deque::new();
        for &v in &push {
            vs.push_back(v);
        }
        push.iter().eq(vs.iter())
    }

    fn iter_front(push: Vec<u32>) -> bool {
        let mut vs = Deque::new();
        for &v in &push {
            vs.push_front(v);
        }
        push.iter().rev().eq(vs.iter())
    }

    fn front_back(push: Vec<(bool, u32)>) -> bool {
        let mut vs1 = Deque::new();
        let mut vs2 = VecDeque::new();
        for &(front, v) in &push {
            if front {
                vs1.push_front(v);
                vs2.push_front(v);
            } else {
                vs1.push_back(v);
                vs2.push_back(v);
            }
        }
        assert_eq!(vs1.front(), vs2.front());
        assert_eq!(vs1.front_mut(), vs2.front_mut());
        assert_eq!(vs1.back(), vs2.back());
        assert_eq!(vs1.back_mut(), vs2.back_mut());
        true
    }

    fn cursor_walk(push: Vec<(bool, u16)>) -> bool {
        let mut vs = Deque::new();
        for &(front, v) in &push {
            if front {
                vs.push_front(v);
            } else {
                vs.push_back(v);
            }
        }
        let mut c = vs.begin();
        for v in vs.iter() {
            assert_eq!(c.get(), Some(v));
            c.move_next();
        }
        c == vs.end()
    }

    fn equals_is_reflexive_and_symmetric(a: Vec<i8>, b: Vec<i8>) -> bool {
        let da: Deque<_> = a.iter().copied().collect();
        let db: Deque<_> = b.iter().copied().collect();
        da.equals(&da)
            && db.equals(&db)
            && da.equals(&db) == db.equals(&da)
            && da.equals(&db) == (a == b)
    }
}

use Op::*;
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    PushBack(T),
    PushFront(T),
    PopBack,
    PopFront,
    CheckEnds,
    Get(u16),
    Truncate(u8),
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match u32::arbitrary(g) % 12 {
            0..=2 => PushBack(T::arbitrary(g)),
            3..=5 => PushFront(T::arbitrary(g)),
            6 => PopBack,
            7 => PopFront,
            8 => Get(u16::arbitrary(g)),
            9 => Truncate(u8::arbitrary(g)),
            10 => CheckEnds,
            11 => Clear,
            _ => unreachable!(),
        }
    }
}

fn do_ops<T>(ops: &[Op<T>], a: &mut Deque<T>, b: &mut VecDeque<T>)
where
    T: PartialOrd + Clone + std::fmt::Debug,
{
    for op in ops {
        match *op {
            PushBack(ref v) => {
                a.push_back(v.clone());
                b.push_back(v.clone());
            }
            PushFront(ref v) => {
                a.push_front(v.clone());
                b.push_front(v.clone());
            }
            PopBack => {
                assert_eq!(a.pop_back(), b.pop_back());
            }
            PopFront => {
                assert_eq!(a.pop_front(), b.pop_front());
            }
            Get(i) => {
                let i = i as usize % (b.len() + 1);
                assert_eq!(a.get(i), b.get(i));
                assert_eq!(a.at(i).is_ok(), i < b.len());
            }
            Truncate(n) => {
                a.truncate(n as usize);
                b.truncate(n as usize);
            }
            CheckEnds => {
                assert_eq!(a.front(), b.front());
                assert_eq!(a.front_mut(), b.front_mut());
                assert_eq!(a.back(), b.back());
                assert_eq!(a.back_mut(), b.back_mut());
            }
            Clear => {
                a.clear();
                b.clear();
            }
        }
        assert_eq!(a.len(), b.len());
        assert_eq!(a.is_empty(), b.is_empty());
    }
}

fn assert_equivalent<T>(a: &Deque<T>, b: &VecDeque<T>) -> bool
where
    T: PartialEq + Debug,
{
    assert_eq!(a.len(), b.len());
    assert_eq!(a.iter().next().is_some(), b.iter().next().is_some());
    for (av, bv) in a.iter().zip(b.iter()) {
        assert_eq!(av, bv, "a and b order differs");
    }
    for (av, bv) in a.iter().rev().zip(b.iter().rev()) {
        assert_eq!(av, bv, "a and b reverse iterator order differs");
    }
    for (i, bv) in b.iter().enumerate() {
        assert_eq!(a.at(i), Ok(bv), "a and b differ at {}", i);
    }
    true
}

quickcheck! {
    fn operations_i8(ops: Large<Vec<Op<i8>>>) -> bool {
        let mut vs = Deque::new();
        let mut reference = VecDeque::new();
        do_ops(&ops, &mut vs, &mut reference);
        assert_equivalent(&vs, &reference)
    }

    fn operations_string(ops: Vec<Op<Alpha>>) -> bool {
        let mut vs = Deque::new();
        let mut reference = VecDeque::new();
        do_ops(&ops, &mut vs, &mut reference);
        assert_equivalent(&vs, &reference)
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd)]
struct Alpha(String);

impl Deref for Alpha {
    type Target = String;
    fn deref(&self) -> &String {
        &self.0
    }
}

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

impl Arbitrary for Alpha {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = u32::arbitrary(g) % g.size() as u32;
        let len = min(len, 16);
        Alpha(
            (0..len)
                .map(|_| ALPHABET[u32::arbitrary(g) as usize % ALPHABET.len()] as char)
                .collect(),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((**self).shrink().map(Alpha))
    }
}

/// quickcheck Arbitrary adaptor -- make a larger vec
#[derive(Clone, Debug)]
struct Large<T>(T);

impl<T> Deref for Large<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Arbitrary for Large<Vec<T>>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let len = u32::arbitrary(g) % (g.size() * 10) as u32;
        Large((0..len).map(|_| T::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((**self).shrink().map(Large))
    }
}
