//! Text rendering of a tour on its grid.

use super::tour::Location;

/// Marker for cells without a location.
const EMPTY: char = '.';

/// Renders `tour` on a `grid_size` x `grid_size` grid.
///
/// The location visited k-th is marked with the letter `'A' + k` (wrapping
/// back to `'A'` after `'Z'`); every other cell is `'.'`. Rows are indexed by
/// `x` and columns by `y`. Cells are separated by single spaces and each row
/// ends with a newline. When two visited locations coincide the later visit
/// wins. Locations outside the grid and tour indices without a location are
/// skipped.
pub fn render_grid(grid_size: usize, tour: &[usize], locations: &[Location]) -> String {
    let mut grid = vec![vec![EMPTY; grid_size]; grid_size];

    for (k, &index) in tour.iter().enumerate() {
        let Some(loc) = locations.get(index) else {
            continue;
        };
        let (Ok(row), Ok(col)) = (usize::try_from(loc.x), usize::try_from(loc.y)) else {
            continue;
        };
        if row < grid_size && col < grid_size {
            grid[row][col] = visit_letter(k);
        }
    }

    let mut out = String::with_capacity(grid_size * (2 * grid_size + 1));
    for row in &grid {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn visit_letter(k: usize) -> char {
    (b'A' + (k % 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_visit_order() {
        let locations = vec![
            Location::new(0, 0),
            Location::new(2, 1),
            Location::new(1, 2),
        ];
        let out = render_grid(3, &[2, 0, 1], &locations);
        assert_eq!(out, "B . .\n. . A\n. C .\n");
    }

    #[test]
    fn test_render_empty_grid() {
        assert_eq!(render_grid(2, &[], &[]), ". .\n. .\n");
        assert_eq!(render_grid(0, &[], &[]), "");
    }

    #[test]
    fn test_render_skips_out_of_grid() {
        let locations = vec![Location::new(0, 0), Location::new(5, 5)];
        assert_eq!(render_grid(2, &[1, 0], &locations), "B .\n. .\n");
    }

    #[test]
    fn test_render_skips_unknown_index() {
        let locations = vec![Location::new(1, 1)];
        assert_eq!(render_grid(2, &[7, 0], &locations), ". .\n. B\n");
    }

    #[test]
    fn test_letters_wrap_after_z() {
        assert_eq!(visit_letter(0), 'A');
        assert_eq!(visit_letter(25), 'Z');
        assert_eq!(visit_letter(26), 'A');
    }
}
