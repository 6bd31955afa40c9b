use crate::app::domain::request::RemapRequest;
use crate::app::domain::settings::SwapSettings;
use crate::app::domain::style::StyleAssignment;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::StyleHost;

/// Rewrite every node or range whose style is a key of `request`.
///
/// Works from a fresh snapshot and evaluates each node or range once against
/// the style it had before the pass, so `A -> B, B -> C` turns `A` into `B`.
/// Returns the number of writes; a pair mapping a style onto itself still
/// counts. Range boundaries are never touched.
pub fn remap_styles<H: StyleHost + ?Sized>(
    host: &mut H,
    request: &RemapRequest,
    settings: &SwapSettings,
) -> Result<usize> {
    if request.is_empty() {
        return Ok(0);
    }

    let mut updated = 0;

    for node in host.text_nodes() {
        if settings.skip_invisible_instance_children && node.is_invisible_instance_child() {
            continue;
        }
        match node.style {
            StyleAssignment::Segmented(segments) => {
                for segment in segments {
                    if let Some(target) = request.target(&segment.style) {
                        host.set_range_style(&node.id, segment.start, segment.end, target)?;
                        log::debug!(
                            "{} [{}..{}]: {} -> {}",
                            node.id,
                            segment.start,
                            segment.end,
                            segment.style,
                            target
                        );
                        updated += 1;
                    }
                }
            }
            StyleAssignment::Uniform(current) => {
                if let Some(target) = request.target(&current) {
                    host.set_node_style(&node.id, target)?;
                    log::debug!("{}: {} -> {}", node.id, current, target);
                    updated += 1;
                }
            }
        }
    }

    log::info!("remap done: {} style writes", updated);
    Ok(updated)
}
