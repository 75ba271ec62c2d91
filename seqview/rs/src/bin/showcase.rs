use std::collections::{BTreeMap, LinkedList};

use eyre::Result;
use seqview::{
    all, cartesian_product, chunk_by, chunk_by_key, cycle, deduce, enumerate, generate, iota,
    iota_until, pipe, to, Closure, Extent, Forward, IntoCursor, SinglePass, Subrange,
};

#[derive(Clone, Debug, PartialEq)]
struct Cat {
    name: &'static str,
    age: u32,
}

seqview::convertible!(Cat);

fn enumerating() {
    println!("== enumerate");
    let mut scores = vec![7, 3, 9];
    for (index, score) in enumerate(&scores) {
        println!("{index}: {score}");
    }
    for (index, score) in enumerate(&mut scores) {
        *score += index as i32;
    }
    println!("shifted by index: {scores:?}");
}

fn cycling() -> Result<()> {
    println!("== cycle");
    let colors = ["red", "green", "blue"];
    let first_seven: Vec<_> = (all(&colors) | pipe::cycle() | pipe::take(7))
        .into_iter()
        .collect();
    println!("{first_seven:?}");

    let looped = cycle(&colors[..]);
    let mut cursor = looped.into_cursor();
    cursor.try_jump(10)?;
    println!("10 steps ahead: {} (index {})", cursor.get(), cursor.current().position());
    Ok(())
}

fn grouping() {
    println!("== chunk_by");
    let readings = [1, 2, 4, 3, 5, 6, 2];
    for group in &chunk_by(&readings, |a: &&i32, b: &&i32| a < b) {
        println!("rising run: {:?}", group.iter().collect::<Vec<_>>());
    }

    let cats = vec![
        Cat { name: "Tom", age: 3 },
        Cat { name: "Felix", age: 3 },
        Cat { name: "Garfield", age: 5 },
    ];
    for (age, group) in &chunk_by_key(&cats, |cat: &&Cat| cat.age) {
        let names: Vec<_> = group.iter().map(|cat| cat.name).collect();
        println!("aged {age}: {names:?}");
    }

    let by_age = chunk_by(&cats, |a: &&Cat, b: &&Cat| a.age == b.age);
    let groups = to::<Vec<Vec<Cat>>, _>(&by_age);
    println!("{} groups, first has {} cats", groups.len(), groups[0].len());
}

fn products() -> Result<()> {
    println!("== cartesian_product");
    let sizes = ["S", "M"];
    let colors = LinkedList::from(["black", "white"]);
    for (size, color) in &cartesian_product((&sizes[..], &colors)) {
        println!("{size}/{color}");
    }

    let grid = cartesian_product((iota_until(0u8, 3), iota_until(0u8, 4)));
    println!("grid of {} cells", grid.try_size()?);
    let mut cursor = grid.into_cursor();
    cursor.try_jump(5)?;
    println!("cell #5 is {:?}", cursor.get());
    Ok(())
}

fn conversions() {
    println!("== to");
    let list = LinkedList::from([3, 1, 2]);
    let widened = to::<Vec<i64>, _>(&list);
    let deduced = to::<deduce::BTreeSet, _>(&list);
    println!("{widened:?} {deduced:?}");

    let nested = LinkedList::from([vec![1, 2], vec![3]]);
    let converted = to::<Vec<std::collections::VecDeque<f64>>, _>(&nested);
    println!("{converted:?}");

    let inventory = BTreeMap::from([("apples", 3u8), ("pears", 5)]);
    let pairs = all(&inventory) | pipe::take(1) | pipe::to::<deduce::Vec>();
    println!("{pairs:?}");
}

fn generators() {
    println!("== iota / generate / stride");
    let odds: Vec<_> = (iota(1u32) | pipe::stride(2).then(pipe::take(5)))
        .into_iter()
        .collect();
    println!("odds: {odds:?}");

    let mut state = (0u64, 1u64);
    let fibonacci = generate(std::iter::from_fn(move || {
        let next = state.0;
        state = (state.1, state.0 + state.1);
        Some(next)
    }));
    let first: Vec<_> = (fibonacci | pipe::take(10)).into_iter().collect();
    println!("fibonacci: {first:?}");

    let part: Subrange<_> = {
        let mut begin = iota_until(0u32, 10).into_cursor();
        begin.step();
        let mut end = begin.clone();
        for _ in 0..3 {
            end.step();
        }
        Subrange::new(begin, end)
    };
    println!("subrange: {:?}", part.iter().collect::<Vec<_>>());
}

fn main() -> Result<()> {
    enumerating();
    cycling()?;
    grouping();
    products()?;
    conversions();
    generators();
    Ok(())
}
