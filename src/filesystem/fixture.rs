//! The tree every session starts from.

use crate::filesystem::{FileTree, Node};

/// Location `cd` returns to with no argument or `~`.
pub const DEFAULT_HOME: &str = "/dev/stanley";

pub const EXECUTABLES_DIR: &str = "executables";

pub fn portfolio() -> FileTree {
    FileTree::new([Node::directory(
        "dev",
        [Node::directory(
            "stanley",
            [
                Node::directory(
                    EXECUTABLES_DIR,
                    [
                        Node::executable("waves.exe"),
                        Node::executable("matrix.exe"),
                        Node::executable("datamines.exe"),
                    ],
                ),
                Node::directory(
                    "docs",
                    [
                        Node::file("II-truth.txt", II_TRUTH),
                        Node::file("enjoy-your-stay.txt", ENJOY_YOUR_STAY),
                        Node::file("rain-steam-and-speed-JMW-Turner.txt", RAIN_STEAM_AND_SPEED),
                        Node::file("no-hands.txt", NO_HANDS),
                    ],
                ),
                Node::protected_file("secrets.txt", SECRETS, "10/29"),
                Node::file("name-ascii.txt", NAME_ASCII),
                Node::file("real-testimonials.txt", REAL_TESTIMONIALS),
            ],
        )],
    )])
}

pub(crate) const SECRETS: &str = r#"<span class="text-dark-red">Hi Lyds, <3</span>"#;

pub(crate) const II_TRUTH: &str = concat!(
    "II. [tɹuθ] Truth\n",
    "that beckons the lungs into disfunction. he tastes a half-breath, ever quick on the draw,\n",
    "the swallow stuck in the squeeze of his throat, like\n",
    "reluctance falling back in on itself.\n",
    "\u{a0}\u{a0} she laughs in poems,\n",
    "\u{a0} \u{a0}\u{a0}\u{a0}cries in fluttered kisses,\n",
    "\u{a0}\u{a0}\u{a0} \u{a0}\u{a0}\u{a0}dances too.\n",
    "no one but them and the night sky could feel his knees bruise and pop\n",
    "under the weight of wooden ground she believed existed only to hold him down.\n",
    "\u{a0}\u{a0} like a flame consumed.",
);

const ENJOY_YOUR_STAY: &str = concat!(
    "\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "                  enjoy your stay\n",
    "enjoy",
);

const RAIN_STEAM_AND_SPEED: &str = concat!(
    "softly,\n",
    "the breath under your lips begins to feel mine\n",
    "your heart, \n",
    "defiant,\n",
    "tries to break the silence.\n",
    "it is fast & barely noticeable,\n",
    "yet it is mine still.\n",
    "\n",
    "Nowhere to go.\n",
    "\n",
    "hints of red steam towards it\n",
    "Forever:\n",
);

pub(crate) const NO_HANDS: &str = concat!(
    "no hands dirtied,\n",
    "slathered with the sounds, \n",
    "all to elicit now -\n",
    "what felt like you back then\n",
    "                  ",
);

const NAME_ASCII: &str = concat!(
    "<img \n",
    "                    src=\"/ascii-art.png\" \n",
    "                    alt=\"signature\" \n",
    "                    style=\"width: 100%; max-width: 750px; height: auto;\"/>",
);

const REAL_TESTIMONIALS: &str = concat!(
    "\n",
    "\"Definitely a coder\" - some\n",
    "\"Dastardly handsome\" - others <span style=\"opacity: 0.7\">(mostly my girlfriend)</span>\n",
    "\"This is a guy you want behind the keyboard\" - anyone who's heard me play the piano\n",
    "\"He's alright\" - my mom\n",
    "              ",
);
