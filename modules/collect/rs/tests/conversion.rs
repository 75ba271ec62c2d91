use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};
use std::hash::BuildHasherDefault;

use ahash::{AHashMap, AHashSet};
use eyre::{ensure, Result};
use itertools::Itertools;

use seqview_collect_rs::{
    convertible, deduce, pipe, to, to_with, Direct, FromCursors, Strategy, Target,
};
use seqview_core_rs::{all, iota_until, Subrange};
use seqview_views_rs::{cartesian_product, chunk_by, pipe as views};

#[derive(Clone, Debug, PartialEq)]
struct Cat {
    name: &'static str,
    age: u32,
}

convertible!(Cat);

fn strategy<T: Target<S>, S>(_: &S) -> Strategy {
    T::STRATEGY
}

#[test]
fn conversion_fidelity() -> Result<()> {
    let list: LinkedList<i32> = (1..=50).collect();
    let vector = to::<Vec<i32>, _>(&list);
    ensure!(vector.len() == 50);
    ensure!(vector.iter().eq(list.iter()));

    let source = BTreeMap::from([(1, 10), (2, 20), (3, 30)]);
    let pairs = to::<Vec<(i32, i32)>, _>(&source);
    let restored = to::<BTreeMap<i32, i32>, _>(&pairs);
    ensure!(restored == source);

    ensure!(strategy::<Vec<i32>, _>(&&list) == Strategy::Insert);
    let moved = to::<Direct<Vec<i32>>, _>([7, 8]);
    ensure!(moved == [7, 8]);
    let borrowed = to::<FromCursors<Vec<&i32>>, _>(&list);
    ensure!(borrowed.len() == 50 && *borrowed[49] == 50);
    Ok(())
}

#[test]
fn nested_conversion() -> Result<()> {
    let source = LinkedList::from([vec![1, 2, 3], vec![], vec![4]]);
    ensure!(strategy::<Vec<VecDeque<f64>>, _>(&&source) == Strategy::Nested);

    let converted = to::<Vec<VecDeque<f64>>, _>(&source);
    ensure!(converted.len() == 3);
    ensure!(converted[0] == [1.0, 2.0, 3.0]);
    ensure!(converted[1].is_empty());
    ensure!(converted[2] == [4.0]);
    Ok(())
}

#[test]
fn grouped_records() -> Result<()> {
    let cats = vec![
        Cat { name: "Bella", age: 12 },
        Cat { name: "Tigger", age: 12 },
        Cat { name: "Chloe", age: 9 },
    ];
    let groups = chunk_by(&cats, |a: &&Cat, b: &&Cat| a.age == b.age);
    let converted = to::<Vec<Vec<Cat>>, _>(&groups);
    ensure!(converted == [cats[..2].to_vec(), cats[2..].to_vec()]);

    let subranges: Vec<Subrange<_>> = to::<deduce::Vec, _>(&groups);
    ensure!(subranges.iter().map(|group| group.count()).collect_vec() == [2, 1]);
    Ok(())
}

#[test]
fn deduced_kinds() -> Result<()> {
    let grid = cartesian_product((iota_until(0u8, 2), iota_until(0u8, 3)));
    let cells = to::<deduce::Vec, _>(grid);
    ensure!(cells == [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    let by_row = to::<deduce::BTreeMap, _>(&cells);
    ensure!(by_row == BTreeMap::from([(0, 2), (1, 2)]));

    let names = ["b", "a", "b"];
    let unique = to::<deduce::HashSet, _>(&names);
    ensure!(unique.len() == 2 && unique.contains("a"));
    Ok(())
}

#[test]
fn hashers() -> Result<()> {
    type Hasher = BuildHasherDefault<std::collections::hash_map::DefaultHasher>;

    let source = BTreeMap::from([("x", 1u16), ("y", 2)]);
    let custom = to_with::<HashMap<String, u64, Hasher>, _>(&source, Hasher::default());
    ensure!(custom["y"] == 2);

    let fast = to::<AHashMap<String, u64>, _>(&source);
    ensure!(fast.len() == 2 && fast.get("x") == Some(&1));

    let unique = to::<AHashSet<i32>, _>(&vec![1, 2, 2]);
    ensure!(unique.len() == 2 && unique.contains(&2));

    let pairs = vec![(3u8, 'c'), (1, 'a'), (3, 'z')];
    let by_key = to::<AHashMap<u8, char>, _>(&pairs);
    ensure!(by_key.len() == 2 && by_key[&3] == 'z');
    Ok(())
}

#[test]
fn deferred_form() -> Result<()> {
    let list = LinkedList::from([5, 6, 7, 8]);
    let collect_two = views::take(2) | pipe::to::<deduce::Vec>();

    let first_two = all(&list) | collect_two;
    ensure!(first_two == [5, 6]);

    let labels = all(&list) | views::enumerate() | pipe::to::<BTreeMap<usize, i64>>();
    ensure!(labels.values().copied().collect_vec() == [5, 6, 7, 8]);

    let text = iota_until(b'a', b'e') | pipe::to::<String>();
    ensure!(text == "abcd");
    Ok(())
}
