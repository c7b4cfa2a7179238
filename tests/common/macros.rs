/// Asserts that every cell of a grid holds one of the five legal categories.
#[macro_export]
macro_rules! assert_category_closure {
    ($grid:expr) => {
        for (x, y) in $grid.positions() {
            let category = $grid
                .get(x as i32, y as i32)
                .expect("position iterator yielded an out-of-range cell");
            assert!(
                reefgen_data::Category::ALL.contains(&category),
                "cell ({}, {}) holds {:?}",
                x,
                y,
                category
            );
        }
    };
}

/// Asserts the nested-window containment of a tally for every category.
#[macro_export]
macro_rules! assert_tally_nested {
    ($tally:expr) => {
        for category in reefgen_data::Category::ALL {
            let vn = $tally.von_neumann4(category);
            let m3 = $tally.moore3(category);
            let m5 = $tally.moore5(category);
            assert!(
                vn <= m3 && m3 <= m5,
                "{:?}: von_neumann4 {} moore3 {} moore5 {}",
                category,
                vn,
                m3,
                m5
            );
        }
    };
}
