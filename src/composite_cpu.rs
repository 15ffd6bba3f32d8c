use image::RgbaImage;

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Source-over for straight-alpha RGBA8, using the source's own alpha as the
/// blend mask.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da_part = mul_div255(u32::from(dst[3]), 255 - sa);
    let out_a = sa + da_part;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = out_a as u8;
    for i in 0..3 {
        let num = u32::from(src[i]) * sa + u32::from(dst[i]) * da_part;
        out[i] = ((num + out_a / 2) / out_a) as u8;
    }
    out
}

/// Paste `src` onto `dst` with its top-left corner at `(x, y)`, alpha
/// compositing each covered pixel. Regions falling outside `dst` are clipped;
/// offsets may be negative.
pub fn paste_over(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = dst.dimensions();
    let (sw, sh) = src.dimensions();

    for sy in 0..sh {
        let dy = y + i64::from(sy);
        if dy < 0 || dy >= i64::from(dh) {
            continue;
        }
        for sx in 0..sw {
            let dx = x + i64::from(sx);
            if dx < 0 || dx >= i64::from(dw) {
                continue;
            }
            let s = src.get_pixel(sx, sy).0;
            if s[3] == 0 {
                continue;
            }
            let d = dst.get_pixel(dx as u32, dy as u32).0;
            dst.put_pixel(dx as u32, dy as u32, image::Rgba(over(d, s)));
        }
    }
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}
