use dioxus::prelude::*;

struct Review {
    author: &'static str,
    pet: &'static str,
    quote: &'static str,
}

const REVIEWS: [Review; 3] = [
    Review {
        author: "Maya R.",
        pet: "Luna (golden retriever)",
        quote: "Booking took two minutes and the groomer was wonderful with Luna.",
    },
    Review {
        author: "Tom H.",
        pet: "Pickles (tabby)",
        quote: "The vet visit was calm and thorough. Pickles barely noticed his shots.",
    },
    Review {
        author: "Aisha K.",
        pet: "Bruno (beagle)",
        quote: "Our sitter sent photos every day. Bruno didn't want us to come home.",
    },
];

#[component]
pub fn Reviews() -> Element {
    rsx! {
        section { class: "w-full bg-teal-800 py-16 px-6 text-center",
            h1 { class: "text-5xl font-bold uppercase tracking-wider text-white", "Reviews" }
        }
        section { class: "w-full max-w-5xl mx-auto px-6 py-16 grid md:grid-cols-3 gap-8",
            for review in REVIEWS {
                div { class: "bg-white rounded-lg border border-stone-200 p-6",
                    p { class: "text-stone-600 italic mb-4", "\u{201c}{review.quote}\u{201d}" }
                    p { class: "text-teal-800 font-semibold", "{review.author}" }
                    p { class: "text-sm text-stone-500", "{review.pet}" }
                }
            }
        }
    }
}
