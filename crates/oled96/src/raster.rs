//! Shape rasterization
//!
//! Every primitive here is built on a single operation, [`Canvas::plot`].
//! On an [`Oled`] session that is the dirty-checked [`Oled::set_pixel`], so
//! redrawing a shape over itself costs no bus traffic.
//!
//! Pixels falling off the panel are clipped. Coordinates are widened to
//! `i64` (`i128` for squared terms) before any arithmetic, and every loop is
//! cut down to the visible rows and columns, so shapes placed anywhere in
//! the `i32` plane draw their visible part and return `Ok`.

use core::f32::consts::PI;
use core::ops::RangeInclusive;

use crate::color::Color;
use crate::display::Oled;
use crate::error::Error;
use crate::interface::Transport;

/// Most vertices a filled polygon may have
pub const MAX_POLYGON_VERTICES: usize = 64;

/// Angular step of [`Oled::arc`] sampling, in radians
const ARC_STEP: f32 = 0.01;

/// Samples along a Bezier curve (t advances by 0.01)
const BEZIER_STEPS: i32 = 100;

/// Inclusive pixel area a [`Canvas`] accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub x_min: i64,
    pub y_min: i64,
    pub x_max: i64,
    pub y_max: i64,
}

impl Bounds {
    fn contains(&self, x: i64, y: i64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    /// Whether the box `(x0, y0)..=(x1, y1)` shares a pixel with the bounds
    fn overlaps(&self, x0: i64, y0: i64, x1: i64, y1: i64) -> bool {
        x0 <= self.x_max && x1 >= self.x_min && y0 <= self.y_max && y1 >= self.y_min
    }

    /// Visible part of the column span `lo..=hi`
    fn columns(&self, lo: i64, hi: i64) -> RangeInclusive<i64> {
        lo.max(self.x_min)..=hi.min(self.x_max)
    }

    /// Visible part of the row span `lo..=hi`
    fn rows(&self, lo: i64, hi: i64) -> RangeInclusive<i64> {
        lo.max(self.y_min)..=hi.min(self.y_max)
    }
}

/// Single-pixel sink the rasterizers draw into
pub(crate) trait Canvas {
    type Error;

    /// Area outside of which pixels are dropped before reaching [`plot`](Canvas::plot)
    fn bounds(&self) -> Bounds;

    fn plot(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error>;
}

impl<T> Canvas for Oled<T>
where
    T: Transport,
{
    type Error = Error<T::Error>;

    fn bounds(&self) -> Bounds {
        Bounds {
            x_min: 0,
            y_min: 0,
            x_max: i64::from(self.width()) - 1,
            y_max: i64::from(self.height()) - 1,
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error> {
        match self.set_pixel(x, y, color) {
            Err(Error::OutOfRange { .. }) => Ok(()),
            other => other,
        }
    }
}

/// Plot a widened coordinate, dropping it when it falls outside the canvas
fn put<C: Canvas>(canvas: &mut C, x: i64, y: i64, color: Color) -> Result<(), C::Error> {
    if !canvas.bounds().contains(x, y) {
        return Ok(());
    }
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => canvas.plot(x, y, color),
        _ => Ok(()),
    }
}

/// Bresenham line, both endpoints included
pub(crate) fn line<C: Canvas>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) -> Result<(), C::Error> {
    segment(
        canvas,
        i64::from(x0),
        i64::from(y0),
        i64::from(x1),
        i64::from(y1),
        color,
    )
}

/// Bresenham walk over the visible steps of the major axis
///
/// The error-term walk moves one pixel along the major axis per step; after
/// `k` steps it has taken [`minor_steps`] steps along the minor axis. Using
/// that closed form lets the walk start and stop at the canvas edge instead
/// of at the endpoints. Endpoints must lie in the `i32` plane.
fn segment<C: Canvas>(
    canvas: &mut C,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Color,
) -> Result<(), C::Error> {
    let bounds = canvas.bounds();
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    if dx >= dy {
        for k in visible_steps(x0, sx, dx, bounds.x_min, bounds.x_max) {
            put(canvas, x0 + sx * k, y0 + sy * minor_steps(k, dy, dx), color)?;
        }
    } else {
        for k in visible_steps(y0, sy, dy, bounds.y_min, bounds.y_max) {
            put(canvas, x0 + sx * minor_steps(k, dx, dy), y0 + sy * k, color)?;
        }
    }

    Ok(())
}

/// Steps `k` in `0..=count` for which `start + step * k` lies in `lo..=hi`
fn visible_steps(start: i64, step: i64, count: i64, lo: i64, hi: i64) -> RangeInclusive<i64> {
    if step > 0 {
        (lo - start).max(0)..=(hi - start).min(count)
    } else {
        (start - hi).max(0)..=(start - lo).min(count)
    }
}

/// Minor-axis steps taken after `k` major-axis steps
///
/// Equals `floor((2 k minor + major - 1) / (2 major))`, the count the
/// `err = dx - dy` walk reaches with its strict `e2 > -dy` / `e2 < dx` tests.
fn minor_steps(k: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let steps = (2 * i128::from(k) * i128::from(minor) + i128::from(major) - 1)
        / (2 * i128::from(major));
    i64::try_from(steps).unwrap_or(minor)
}

fn hline<C: Canvas>(canvas: &mut C, x: i64, y: i64, length: i64, color: Color) -> Result<(), C::Error> {
    let bounds = canvas.bounds();
    if bounds.rows(y, y).is_empty() {
        return Ok(());
    }
    for x in bounds.columns(x, x + length - 1) {
        put(canvas, x, y, color)?;
    }
    Ok(())
}

fn vline<C: Canvas>(canvas: &mut C, x: i64, y: i64, length: i64, color: Color) -> Result<(), C::Error> {
    let bounds = canvas.bounds();
    if bounds.columns(x, x).is_empty() {
        return Ok(());
    }
    for y in bounds.rows(y, y + length - 1) {
        put(canvas, x, y, color)?;
    }
    Ok(())
}

/// Midpoint circle outline
pub(crate) fn circle<C: Canvas>(
    canvas: &mut C,
    xc: i32,
    yc: i32,
    r: i32,
    color: Color,
) -> Result<(), C::Error> {
    let (xc, yc, r) = (i64::from(xc), i64::from(yc), i64::from(r));
    if !canvas.bounds().overlaps(xc - r, yc - r, xc + r, yc + r) {
        return Ok(());
    }

    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while y >= x {
        for (px, py) in [
            (xc + x, yc + y),
            (xc - x, yc + y),
            (xc + x, yc - y),
            (xc - x, yc - y),
            (xc + y, yc + x),
            (xc - y, yc + x),
            (xc + y, yc - x),
            (xc - y, yc - x),
        ] {
            put(canvas, px, py, color)?;
        }

        x += 1;

        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
    }

    Ok(())
}

pub(crate) fn filled_circle<C: Canvas>(
    canvas: &mut C,
    xc: i32,
    yc: i32,
    r: i32,
    color: Color,
) -> Result<(), C::Error> {
    let (xc, yc, r) = (i64::from(xc), i64::from(yc), i64::from(r));
    let r2 = i128::from(r) * i128::from(r);
    let bounds = canvas.bounds();

    for y in bounds.rows(yc - r, yc + r) {
        for x in bounds.columns(xc - r, xc + r) {
            let dx = i128::from(x - xc);
            let dy = i128::from(y - yc);
            if dx * dx + dy * dy <= r2 {
                put(canvas, x, y, color)?;
            }
        }
    }
    Ok(())
}

fn plot_quadrants<C: Canvas>(
    canvas: &mut C,
    xc: i64,
    yc: i64,
    x: i128,
    y: i128,
    color: Color,
) -> Result<(), C::Error> {
    let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) else {
        return Ok(());
    };
    put(canvas, xc + x, yc + y, color)?;
    put(canvas, xc - x, yc + y, color)?;
    put(canvas, xc + x, yc - y, color)?;
    put(canvas, xc - x, yc - y, color)
}

/// Two-region midpoint ellipse outline
pub(crate) fn ellipse<C: Canvas>(
    canvas: &mut C,
    xc: i32,
    yc: i32,
    rx: i32,
    ry: i32,
    color: Color,
) -> Result<(), C::Error> {
    let (xc, yc) = (i64::from(xc), i64::from(yc));
    let (ax, ay) = (i64::from(rx).abs(), i64::from(ry).abs());
    if !canvas.bounds().overlaps(xc - ax, yc - ay, xc + ax, yc + ay) {
        return Ok(());
    }

    let rx2 = i128::from(rx) * i128::from(rx);
    let ry2 = i128::from(ry) * i128::from(ry);
    let two_rx2 = 2 * rx2;
    let two_ry2 = 2 * ry2;

    let mut x: i128 = 0;
    let mut y: i128 = i128::from(ry);
    let mut px: i128 = 0;
    let mut py: i128 = two_rx2 * y;

    // Region 1: slope magnitude below 1, step in x
    let mut p = ((ry2 - rx2 * y) as f64 + 0.25 * rx2 as f64) as i128;
    while px < py {
        plot_quadrants(canvas, xc, yc, x, y, color)?;

        x += 1;
        px += two_ry2;
        if p < 0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= two_rx2;
            p += ry2 + px - py;
        }
    }

    // Region 2: step in y
    let half = x as f64 + 0.5;
    p = (ry2 as f64 * half * half + (rx2 * (y - 1) * (y - 1)) as f64 - (rx2 * ry2) as f64) as i128;
    while y >= 0 {
        plot_quadrants(canvas, xc, yc, x, y, color)?;

        y -= 1;
        py -= two_rx2;
        if p > 0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += two_ry2;
            p += rx2 - py + px;
        }
    }

    Ok(())
}

pub(crate) fn filled_ellipse<C: Canvas>(
    canvas: &mut C,
    xc: i32,
    yc: i32,
    rx: i32,
    ry: i32,
    color: Color,
) -> Result<(), C::Error> {
    let (xc, yc) = (i64::from(xc), i64::from(yc));
    let (rx, ry) = (i64::from(rx), i64::from(ry));
    let rx2 = i128::from(rx) * i128::from(rx);
    let ry2 = i128::from(ry) * i128::from(ry);
    let bounds = canvas.bounds();

    for y in bounds.rows(yc - ry, yc + ry) {
        for x in bounds.columns(xc - rx, xc + rx) {
            let dx = i128::from(x - xc);
            let dy = i128::from(y - yc);
            if dx * dx * ry2 + dy * dy * rx2 <= rx2 * ry2 {
                put(canvas, x, y, color)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn rectangle<C: Canvas>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
) -> Result<(), C::Error> {
    let (x, y) = (i64::from(x), i64::from(y));
    let (width, height) = (i64::from(width), i64::from(height));

    hline(canvas, x, y, width, color)?;
    hline(canvas, x, y + height - 1, width, color)?;
    vline(canvas, x, y, height, color)?;
    vline(canvas, x + width - 1, y, height, color)
}

pub(crate) fn filled_rectangle<C: Canvas>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
) -> Result<(), C::Error> {
    let (x, y) = (i64::from(x), i64::from(y));
    let bounds = canvas.bounds();

    for row in bounds.rows(y, y + i64::from(height) - 1) {
        for column in bounds.columns(x, x + i64::from(width) - 1) {
            put(canvas, column, row, color)?;
        }
    }
    Ok(())
}

pub(crate) fn triangle<C: Canvas>(
    canvas: &mut C,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    (x2, y2): (i32, i32),
    color: Color,
) -> Result<(), C::Error> {
    line(canvas, x0, y0, x1, y1, color)?;
    line(canvas, x1, y1, x2, y2, color)?;
    line(canvas, x2, y2, x0, y0, color)
}

/// Scanline triangle fill between the long edge and the active short edge
pub(crate) fn filled_triangle<C: Canvas>(
    canvas: &mut C,
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
    color: Color,
) -> Result<(), C::Error> {
    let mut v = [a, b, c].map(|(x, y)| (i64::from(x), i64::from(y)));
    if v[0].1 > v[1].1 {
        v.swap(0, 1);
    }
    if v[1].1 > v[2].1 {
        v.swap(1, 2);
    }
    if v[0].1 > v[1].1 {
        v.swap(0, 1);
    }
    let [(x0, y0), (x1, y1), (x2, y2)] = v;

    let total_height = y2 - y0;
    if total_height == 0 {
        // all three vertices on one row
        let left = x0.min(x1).min(x2);
        let right = x0.max(x1).max(x2);
        return hline(canvas, left, y0, right - left + 1, color);
    }

    let bounds = canvas.bounds();
    let first = (bounds.y_min - y0).max(0);
    let last = (bounds.y_max - y0).min(total_height);

    for i in first..=last {
        let second_half = i > y1 - y0 || y1 == y0;
        let segment_height = if second_half { y2 - y1 } else { y1 - y0 };
        let alpha = i as f32 / total_height as f32;
        let beta = if segment_height == 0 {
            0.0
        } else {
            (i - if second_half { y1 - y0 } else { 0 }) as f32 / segment_height as f32
        };

        let mut ax = (x0 as f32 + (x2 - x0) as f32 * alpha) as i64;
        let mut bx = if second_half {
            (x1 as f32 + (x2 - x1) as f32 * beta) as i64
        } else {
            (x0 as f32 + (x1 - x0) as f32 * beta) as i64
        };

        if ax > bx {
            core::mem::swap(&mut ax, &mut bx);
        }

        for x in bounds.columns(ax, bx) {
            put(canvas, x, y0 + i, color)?;
        }
    }

    Ok(())
}

/// Closed outline through `vertices`, last vertex joined to the first
pub(crate) fn polygon<C: Canvas>(
    canvas: &mut C,
    vertices: &[(i32, i32)],
    color: Color,
) -> Result<(), C::Error> {
    let n = vertices.len();
    for (i, &(x0, y0)) in vertices.iter().enumerate() {
        let (x1, y1) = vertices[(i + 1) % n];
        line(canvas, x0, y0, x1, y1, color)?;
    }
    Ok(())
}

/// Even-odd scanline fill
///
/// An edge counts on row `y` when exactly one endpoint lies strictly above
/// it, so shared vertices are not counted twice. A trailing unpaired
/// intersection (malformed input) is dropped. At most
/// [`MAX_POLYGON_VERTICES`] vertices are considered.
pub(crate) fn filled_polygon<C: Canvas>(
    canvas: &mut C,
    vertices: &[(i32, i32)],
    color: Color,
) -> Result<(), C::Error> {
    let vertices = &vertices[..vertices.len().min(MAX_POLYGON_VERTICES)];
    let n = vertices.len();

    let Some(min_y) = vertices.iter().map(|v| v.1).min() else {
        return Ok(());
    };
    let max_y = vertices.iter().map(|v| v.1).max().unwrap_or(min_y);
    let bounds = canvas.bounds();

    for y in bounds.rows(i64::from(min_y), i64::from(max_y)) {
        let mut nodes: heapless::Vec<i64, MAX_POLYGON_VERTICES> = heapless::Vec::new();

        for (i, &(xi, yi)) in vertices.iter().enumerate() {
            let (xj, yj) = vertices[(i + 1) % n];
            let (xi, yi, xj, yj) = (i64::from(xi), i64::from(yi), i64::from(xj), i64::from(yj));

            if (yi < y && yj >= y) || (yj < y && yi >= y) {
                let offset =
                    i128::from(y - yi) * i128::from(xj - xi) / i128::from(yj - yi);
                // the intercept lies between xi and xj
                let x = xi + i64::try_from(offset).unwrap_or(xj - xi);
                // at most one intersection per edge
                if nodes.push(x).is_err() {
                    break;
                }
            }
        }

        nodes.sort_unstable();

        if nodes.len() % 2 == 1 {
            log::warn!("row {y}: unpaired polygon intersection dropped");
        }

        for span in nodes.chunks_exact(2) {
            for x in bounds.columns(span[0], span[1]) {
                put(canvas, x, y, color)?;
            }
        }
    }

    Ok(())
}

/// Arc sampled every [`ARC_STEP`] radians from `start` to `end` degrees
///
/// Samples are plotted individually, not joined.
pub(crate) fn arc<C: Canvas>(
    canvas: &mut C,
    xc: i32,
    yc: i32,
    r: i32,
    start: f32,
    end: f32,
    color: Color,
) -> Result<(), C::Error> {
    let start_rad = start * PI / 180.0;
    let end_rad = end * PI / 180.0;

    if start_rad.is_nan() || end_rad.is_nan() || end_rad < start_rad {
        return Ok(());
    }

    let (xc, yc) = (i64::from(xc), i64::from(yc));
    let reach = i64::from(r).abs();
    if !canvas.bounds().overlaps(xc - reach, yc - reach, xc + reach, yc + reach) {
        return Ok(());
    }

    let steps = ((end_rad - start_rad) / ARC_STEP) as i32;
    for i in 0..=steps {
        let theta = start_rad + i as f32 * ARC_STEP;
        let x = xc + (r as f32 * libm::cosf(theta)) as i64;
        let y = yc + (r as f32 * libm::sinf(theta)) as i64;
        put(canvas, x, y, color)?;
    }

    Ok(())
}

/// Cubic Bezier from `p0` to `p3`, sampled and joined with lines
pub(crate) fn bezier<C: Canvas>(
    canvas: &mut C,
    p0: (i32, i32),
    p1: (i32, i32),
    p2: (i32, i32),
    p3: (i32, i32),
    color: Color,
) -> Result<(), C::Error> {
    let (mut prev_x, mut prev_y) = p0;

    for i in 1..=BEZIER_STEPS {
        let t = i as f32 / BEZIER_STEPS as f32;
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;
        let uuu = uu * u;
        let ttt = tt * t;

        let xf = uuu * p0.0 as f32
            + 3.0 * uu * t * p1.0 as f32
            + 3.0 * u * tt * p2.0 as f32
            + ttt * p3.0 as f32;
        let yf = uuu * p0.1 as f32
            + 3.0 * uu * t * p1.1 as f32
            + 3.0 * u * tt * p2.1 as f32
            + ttt * p3.1 as f32;

        // float to int casts saturate at the i32 limits
        let x = (xf + 0.5) as i32;
        let y = (yf + 0.5) as i32;

        line(canvas, prev_x, prev_y, x, y, color)?;
        prev_x = x;
        prev_y = y;
    }

    Ok(())
}

/// `y = a * (x - h)^2 + k` for every integer x in `xs..=xe`, joined with lines
///
/// Rows beyond the `i32` range saturate. Only segments touching a visible
/// column are drawn; the one ending at column `x` starts at `x - 1`.
pub(crate) fn parabola<C: Canvas>(
    canvas: &mut C,
    h: i32,
    k: i32,
    a: f32,
    xs: i32,
    xe: i32,
    color: Color,
) -> Result<(), C::Error> {
    if xe < xs {
        return Ok(());
    }

    let eval = |x: i64| {
        let d = (x - i64::from(h)) as f32;
        i64::from(k.saturating_add((a * d * d + 0.5) as i32))
    };

    let (xs, xe) = (i64::from(xs), i64::from(xe));
    put(canvas, xs, eval(xs), color)?;

    let bounds = canvas.bounds();
    for x in (xs + 1).max(bounds.x_min)..=xe.min(bounds.x_max + 1) {
        segment(canvas, x - 1, eval(x - 1), x, eval(x), color)?;
    }

    Ok(())
}

/// Shape drawing. Any `i32` coordinates are accepted; pixels off the panel
/// are skipped.
impl<T> Oled<T>
where
    T: Transport,
{
    /// Line from `(x0, y0)` to `(x1, y1)`, both ends included
    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        line(self, x0, y0, x1, y1, color)
    }

    /// Circle outline centred on `(xc, yc)`
    pub fn circle(&mut self, xc: i32, yc: i32, r: i32, color: Color) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        circle(self, xc, yc, r, color)
    }

    pub fn filled_circle(
        &mut self,
        xc: i32,
        yc: i32,
        r: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        filled_circle(self, xc, yc, r, color)
    }

    /// Ellipse outline with radii `rx`, `ry`
    pub fn ellipse(
        &mut self,
        xc: i32,
        yc: i32,
        rx: i32,
        ry: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        ellipse(self, xc, yc, rx, ry, color)
    }

    pub fn filled_ellipse(
        &mut self,
        xc: i32,
        yc: i32,
        rx: i32,
        ry: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        filled_ellipse(self, xc, yc, rx, ry, color)
    }

    /// Square outline with top-left corner `(x, y)`
    pub fn square(&mut self, x: i32, y: i32, size: i32, color: Color) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        rectangle(self, x, y, size, size, color)
    }

    pub fn filled_square(
        &mut self,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        filled_rectangle(self, x, y, size, size, color)
    }

    /// Rectangle outline with top-left corner `(x, y)`
    pub fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        rectangle(self, x, y, width, height, color)
    }

    pub fn filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        filled_rectangle(self, x, y, width, height, color)
    }

    pub fn triangle(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        c: (i32, i32),
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        triangle(self, a, b, c, color)
    }

    /// Filled triangle. Vertices may share a row.
    pub fn filled_triangle(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        c: (i32, i32),
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        filled_triangle(self, a, b, c, color)
    }

    /// Closed polygon outline
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for an empty vertex list.
    pub fn polygon(&mut self, vertices: &[(i32, i32)], color: Color) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        if vertices.is_empty() {
            return Err(Error::InvalidParameter("polygon without vertices"));
        }
        polygon(self, vertices, color)
    }

    /// Filled polygon (even-odd rule)
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for an empty vertex list or more than
    /// [`MAX_POLYGON_VERTICES`] vertices.
    pub fn filled_polygon(
        &mut self,
        vertices: &[(i32, i32)],
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        if vertices.is_empty() {
            return Err(Error::InvalidParameter("polygon without vertices"));
        }
        if vertices.len() > MAX_POLYGON_VERTICES {
            return Err(Error::InvalidParameter("too many polygon vertices"));
        }
        filled_polygon(self, vertices, color)
    }

    /// Arc of radius `r` from `start` to `end` degrees (0 = +x, clockwise on screen)
    pub fn arc(
        &mut self,
        xc: i32,
        yc: i32,
        r: i32,
        start: f32,
        end: f32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        arc(self, xc, yc, r, start, end, color)
    }

    /// Cubic Bezier curve through control points `p1`, `p2`
    pub fn bezier(
        &mut self,
        p0: (i32, i32),
        p1: (i32, i32),
        p2: (i32, i32),
        p3: (i32, i32),
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        bezier(self, p0, p1, p2, p3, color)
    }

    /// Parabola with vertex `(h, k)` between columns `xs` and `xe`
    ///
    /// Every integer column in `xs..=xe` is evaluated, so `xs == xe` plots the
    /// single point at `xs`. Nothing is drawn when `xe < xs`.
    pub fn parabola(
        &mut self,
        h: i32,
        k: i32,
        a: f32,
        xs: i32,
        xe: i32,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        parabola(self, h, k, a, xs, xe, color)
    }
}
