use log::{info, warn};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config;
use crate::rig::ambient::Decoration;
use crate::rig::canvas::CanvasPainter;
use crate::rig::driver::RobotRig;
use crate::rig::error::RigError;
use crate::rig::frame_loop::{FrameLoop, RafScheduler};
use crate::rig::render::DrawList;
use crate::rig::scroll::{ScrollListener, ScrollTracker};

/// Everything the scene owns while mounted. Dropping it stops the frame
/// loop first, then detaches the scroll listeners.
struct Mounted {
    _frames: FrameLoop<RafScheduler>,
    _listener: ScrollListener,
}

fn mount(canvas: HtmlCanvasElement) -> Result<Mounted, RigError> {
    let config = config::load_rig_config();
    let decoration = Decoration::new(&config.ambient, config.time_step);
    let mut rig = RobotRig::new(config);

    let tracker = ScrollTracker::new();
    let reader = tracker.subscribe();
    let listener = ScrollListener::attach(tracker)?;
    let mut painter = CanvasPainter::new(canvas)?;

    let frames = FrameLoop::new(RafScheduler::new()?, move |_| {
        let (width, height) = reader.viewport();
        painter.resize(width, height);
        rig.tick(reader.progress());

        let camera = *painter.camera();
        let mut list = DrawList::new();
        list.push_ambient(&camera, decoration.particles(), &decoration.frame(rig.elapsed()));
        list.push_figure(&camera, rig.scene());
        painter.paint(&list);
    });
    frames.start()?;

    Ok(Mounted {
        _frames: frames,
        _listener: listener,
    })
}

#[function_component(RobotScene)]
pub fn robot_scene() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => match mount(canvas) {
                        Ok(mounted) => {
                            info!("Robot scene mounted");
                            Some(mounted)
                        }
                        Err(err) => {
                            warn!("Robot scene disabled: {}", err);
                            None
                        }
                    },
                    None => {
                        warn!("Robot scene canvas missing");
                        None
                    }
                };

                move || {
                    if mounted.is_some() {
                        drop(mounted);
                        info!("Robot scene unmounted");
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .robot-scene {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100vw;
                        height: 100vh;
                        z-index: 1;
                        pointer-events: none;
                    }
                "#}
            </style>
            <canvas class="robot-scene" ref={canvas_ref} aria-hidden="true"></canvas>
        </>
    }
}
