use rand::random;

// drive the induced sorting directly so short inputs exercise it too;
// the reference order comes from a plain comparison sort
macro_rules! assert_sorts_like_reference {
    ($s:expr) => {{
        let s = &($s)[..];
        let scale = s.iter().max().map_or(0, |&x| x as usize) + 1;

        let mut expect: Vec<u32> = (0..s.len() as u32).collect();
        expect.sort_by(|&i, &j| Ord::cmp(&s[i as usize..], &s[j as usize..]));

        let mut sa = vec![0u32; s.len()];
        super::sa_is(s, scale, &mut sa[..]);
        assert_eq!(sa, expect);
    }};
}

#[test]
fn induced_sort_basic_correctness() {
    assert_sorts_like_reference!([1u32, 2]);
    assert_sorts_like_reference!([2u32, 1]);
    assert_sorts_like_reference!([5u32, 5, 5, 5, 5, 5]);
    assert_sorts_like_reference!([2u32, 1, 4, 1, 1, 4, 1, 3, 1]);
    assert_sorts_like_reference!([1u32, 2, 2, 1, 1, 3, 3, 1, 1, 2, 2, 3, 3, 2]);
    assert_sorts_like_reference!([3u32, 1, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 2]);
    assert_sorts_like_reference!([4u32, 3, 2, 1, 1, 2, 3, 4]);
}

#[test]
fn induced_sort_rank_shaped_sequences() {
    // dense 1-based ranks with lots of repetition, the shape the
    // sampling pipeline feeds in
    let mut seq = Vec::new();
    for i in 0..400u32 {
        seq.push(i % 7 + 1);
    }
    assert_sorts_like_reference!(seq);

    let mut seq = Vec::new();
    for i in 0..300u32 {
        seq.push(if i % 11 == 0 { 1 } else { i % 3 + 2 });
    }
    assert_sorts_like_reference!(seq);
}

#[test]
fn induced_sort_random_samples() {
    const MIN_LEN: usize = 2;
    const MAX_LEN: usize = 1000;
    const SAMPLES: usize = 500;

    let mut array = vec![0u32; MAX_LEN];
    for _ in 0..SAMPLES {
        let sigma: u32 = if random::<bool>() {
            // tiny alphabets force deep recursion
            1 + random::<u32>() % 4
        } else {
            1 + random::<u32>() % 200
        };

        let n = random::<usize>() % (MAX_LEN - MIN_LEN) + MIN_LEN;
        for x in array[..n].iter_mut() {
            *x = random::<u32>() % sigma + 1;
        }

        assert_sorts_like_reference!(&array[..n]);
    }
}

#[test]
fn public_entry_point_carries_the_sentinel() {
    for &n in &[0usize, 1, 5, 100, 500] {
        let ranks: Vec<u32> = (0..n).map(|_| random::<u32>() % 9 + 1).collect();
        let mut sa = vec![0u32; n + 1];
        super::sort(&ranks, 10, &mut sa[..]);

        assert_eq!(sa[0] as usize, n);
        let mut expect: Vec<u32> = (0..n as u32).collect();
        expect.sort_by(|&i, &j| Ord::cmp(&ranks[i as usize..], &ranks[j as usize..]));
        assert_eq!(&sa[1..], &expect[..]);
    }
}
