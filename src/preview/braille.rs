/// Braille dot positions within a 2x4 cell:
/// (0,0)=0x01 (1,0)=0x08
/// (0,1)=0x02 (1,1)=0x10
/// (0,2)=0x04 (1,2)=0x20
/// (0,3)=0x40 (1,3)=0x80
pub const DOT_MAP: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

const BRAILLE_BASE: u32 = 0x2800;

/// A canvas for sub-character braille rendering.
/// Each character cell maps to a 2x4 grid of braille dots.
pub struct BrailleCanvas {
    grid: Vec<bool>,
    pub grid_w: usize,
    pub grid_h: usize,
    char_w: usize,
    char_h: usize,
}

impl BrailleCanvas {
    /// Create a new braille canvas for the given character dimensions.
    pub fn new(char_w: usize, char_h: usize) -> Self {
        let grid_w = char_w * 2;
        let grid_h = char_h * 4;
        Self {
            grid: vec![false; grid_w * grid_h],
            grid_w,
            grid_h,
            char_w,
            char_h,
        }
    }

    /// Set a single dot on the braille grid (bounds-checked).
    #[inline]
    pub fn set(&mut self, gx: isize, gy: isize) {
        if gx >= 0 && gy >= 0 && (gx as usize) < self.grid_w && (gy as usize) < self.grid_h {
            self.grid[gy as usize * self.grid_w + gx as usize] = true;
        }
    }

    pub fn is_set(&self, gx: usize, gy: usize) -> bool {
        gx < self.grid_w && gy < self.grid_h && self.grid[gy * self.grid_w + gx]
    }

    /// Draw a line using Bresenham's algorithm.
    pub fn line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize) {
        bresenham_line(&mut self.grid, self.grid_w, self.grid_h, x0, y0, x1, y1);
    }

    /// Encode the grid as text, one string per character row.
    /// Cells without dots become spaces so the output stays readable without a font
    /// that renders the empty braille pattern.
    pub fn rows(&self) -> Vec<String> {
        (0..self.char_h)
            .map(|cy| {
                (0..self.char_w)
                    .map(|cx| {
                        let mut braille: u8 = 0;
                        for (dx, col) in DOT_MAP.iter().enumerate() {
                            for (dy, &bit) in col.iter().enumerate() {
                                if self.is_set(cx * 2 + dx, cy * 4 + dy) {
                                    braille |= bit;
                                }
                            }
                        }
                        if braille == 0 {
                            ' '
                        } else {
                            char::from_u32(BRAILLE_BASE + braille as u32).unwrap_or(' ')
                        }
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

/// Draw a line on a boolean grid using Bresenham's algorithm.
/// Dots outside the grid are dropped.
pub fn bresenham_line(
    grid: &mut [bool],
    grid_w: usize,
    grid_h: usize,
    x0: isize,
    y0: isize,
    x1: isize,
    y1: isize,
) {
    let mut x0 = x0;
    let mut y0 = y0;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx: isize = if x0 < x1 { 1 } else { -1 };
    let sy: isize = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && x0 < grid_w as isize && y0 >= 0 && y0 < grid_h as isize {
            grid[y0 as usize * grid_w + x0 as usize] = true;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
