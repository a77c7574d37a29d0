use crate::components::utils::render_footer;
use yew::prelude::*;

const GALLERY: [(&str, &str, &str); 3] = [
    ("/image/ai-face.jpg", "AI Interface", "tile tile-half"),
    ("/image/deepfake-tech.jpg", "Deepfake Technology", "tile tile-half"),
    ("/image/face-mesh.jpg", "Wireframe face", "tile tile-half tile-short"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <main class="home">
                <h1 class="hero-title">{"Detect Deepfakes with Cutting-Edge AI"}</h1>

                <div class="home-grid">
                    { for GALLERY.iter().map(|(src, alt, class)| html! {
                        <div class={*class}>
                            <img src={*src} alt={*alt} />
                        </div>
                    }) }

                    <div class="tile-group">
                        <div class="tile tile-scan-back">
                            <img src="/image/face-scan-2.jpg" alt="3D Scan" />
                        </div>
                        <div class="tile tile-scan-front">
                            <img src="/image/face-scan-1.jpg" alt="Face Profile" />
                        </div>
                    </div>

                    <div class="blurb">
                        <p>
                            <strong>{"DeepShield"}</strong>
                            {" leverages state-of-the-art AI and pretrained models to detect deepfakes \
                              with precision. By analyzing facial features and measuring cosine \
                              similarity, we ensure authenticity in digital media and help protect \
                              against misinformation and manipulation."}
                        </p>
                    </div>

                    <div class="tile tile-half tile-tall">
                        <img src="/image/ai_intelligence.jpg" alt="AI Intelligence" />
                    </div>
                </div>
            </main>

            { render_footer("©2024 DeepShield. Protected by Google Privacy Policy & Terms of Service.") }
        </>
    }
}
