use std::sync::OnceLock;

use crate::quiz::animal::{Animal, Mbti};
use crate::quiz::catalog::ResultCatalog;
use crate::quiz::dataset::Dataset;
use crate::quiz::graph::QuestionGraph;
use crate::quiz::node::{Choice, QuestionNode};

/// The built-in dataset, constructed on first use and shared for the life of
/// the process.
pub fn canonical() -> &'static Dataset {
    static CANONICAL: OnceLock<Dataset> = OnceLock::new();
    CANONICAL.get_or_init(|| Dataset {
        results: animal_catalog(),
        questions: midpoint_graph(),
    })
}

fn animal(
    mbti: Mbti,
    title: &str,
    overview: &str,
    image_key: &str,
    rarity_score: f64,
    description: &str,
    friends: &[Mbti],
) -> Animal {
    Animal {
        id: mbti.code().into(),
        title: title.into(),
        overview: overview.into(),
        description: description.into(),
        image_key: image_key.into(),
        rarity_score,
        friends: friends.iter().map(|f| f.result_index()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Results, in MBTI index order
// ---------------------------------------------------------------------------

pub fn animal_catalog() -> ResultCatalog {
    use Mbti::*;

    ResultCatalog::new(vec![
        animal(
            Istj,
            "貓頭鷹",
            "務實的守望者",
            "owl",
            3.98,
            "安靜又專注，像夜晚的守護者。雖然不愛驚喜，但總是默默地用效率和信賴守護著身邊的人。",
            &[Esfp, Estp],
        ),
        animal(
            Isfj,
            "鹿",
            "優雅的代表",
            "deer",
            9.58,
            "優雅中帶著一絲害羞，敏銳的第六感讓牠總能在危險來臨前輕巧避開，像森林裡的舞者。",
            &[Esfp, Estp],
        ),
        animal(
            Infj,
            "鯨魚",
            "智慧的象徵",
            "whale",
            6.29,
            "溫柔又深沉，擁有寬廣的內心世界。牠們常把自己藏得很深，但那份慈悲讓人無法忽視。",
            &[Enfp, Entp],
        ),
        animal(
            Intj,
            "龍",
            "離群的智者",
            "dragon",
            2.87,
            "聰明且神秘，熱愛挑戰難題。喜歡獨處，享受屬於自己的奇幻世界，總是充滿好奇的好奇心。",
            &[Enfp, Entp],
        ),
        animal(
            Istp,
            "豹",
            "隱密的狙擊手",
            "leopard",
            2.62,
            "觀察力敏銳，行動迅速。習慣獨來獨往，很少有人能真正接近牠。",
            &[Esfj, Estj],
        ),
        animal(
            Isfp,
            "長頸鹿",
            "獨特的觀察者",
            "giraffe",
            7.81,
            "第一眼看起來有點古怪，但牠優雅又敏感，總能看到別人忽略的細節。",
            &[Enfj, Esfj, Estj],
        ),
        animal(
            Infp,
            "雪豹",
            "抽象的先知",
            "snowLeopard",
            14.23,
            "神秘又優雅，對環境特別敏感，喜歡安靜的地方，是隱藏的天才。",
            &[Enfj, Entj],
        ),
        animal(
            Intp,
            "貓",
            "熱情的探索者",
            "cat",
            5.57,
            "聰明又好奇，對感興趣的事物充滿熱情，規則對牠來說只是挑戰的開始。",
            &[Entj, Estj],
        ),
        animal(
            Estp,
            "熊",
            "魅力的具現化",
            "bear",
            2.36,
            "好鬥又勇敢，充滿魅力。表面和善，內心卻擁有強大的戰鬥力。",
            &[Isfj, Istj],
        ),
        animal(
            Esfp,
            "猴子",
            "生活的體驗者",
            "monkey",
            6.70,
            "外向活潑，是團隊的開心果，創造力豐富，總能活在當下享受生活。",
            &[Isfj, Istj],
        ),
        animal(
            Enfp,
            "獨角獸",
            "夢幻的存在",
            "unicorn",
            12.56,
            "稀有又美麗，聰明忠誠且熱情，個性開朗積極，夢幻一般的存在。",
            &[Infj, Intj],
        ),
        animal(
            Entp,
            "鸚鵡",
            "華麗的明星",
            "parrot",
            4.32,
            "擅長言語，思維敏捷，喜歡展現自己的才華和觀點，是群體中的焦點。",
            &[Infj, Intj],
        ),
        animal(
            Estj,
            "鱷魚",
            "力量的實現",
            "crocodile",
            3.81,
            "務實果斷，重視程序，行動迅速且有效，總能達成目標。",
            &[Intp, Isfp, Istp],
        ),
        animal(
            Esfj,
            "燕子",
            "春天的化身",
            "swallow",
            9.33,
            "社交高手，外向開朗，真誠的笑容是牠最強的武器，總能贏得人心。",
            &[Isfp, Istp],
        ),
        animal(
            Enfj,
            "狗",
            "可靠的夥伴",
            "dog",
            5.80,
            "擅長察覺細節，喜歡團隊合作，反應敏捷且責任感強，是最值得信賴的朋友。",
            &[Infp, Isfp],
        ),
        animal(
            Entj,
            "獅子",
            "王者",
            "lion",
            2.14,
            "不僅強大，還有遠見和組織力，總是帶領團隊為勝利奮鬥。",
            &[Infp, Intp],
        ),
    ])
}

// ---------------------------------------------------------------------------
// Questions. Node 0 is the cover question.
// ---------------------------------------------------------------------------

pub fn midpoint_graph() -> QuestionGraph {
    use Mbti::*;

    let end = |label: &str, mbti: Mbti| Choice::end(label, mbti.result_index());

    QuestionGraph::new(vec![
        QuestionNode::new(
            "midpoint-0",
            "你會覺得自己有點奇怪嗎？",
            vec![Choice::next("有那麼一點...", 1), Choice::next("完全不會", 2)],
        ),
        QuestionNode::new(
            "midpoint-1",
            "你會對社交活動感到恐慌嗎？",
            vec![Choice::next("有那麼一點...", 3), Choice::next("完全不會", 4)],
        ),
        QuestionNode::new(
            "midpoint-2",
            "你對社會規則的看法是什麼？",
            vec![
                Choice::next("規則是用來打破的", 5),
                Choice::next("規則對社會是必須的", 6),
                Choice::next("規則不要讓別人不舒服就好", 7),
            ],
        ),
        QuestionNode::new(
            "midpoint-3",
            "你自認理性嗎？",
            vec![Choice::next("是", 8), Choice::next("不", 9)],
        ),
        QuestionNode::new(
            "midpoint-4",
            "你覺得你有時候會有點難相處嗎？",
            vec![end("才不會", Infj), Choice::next("多多少少吧", 10)],
        ),
        QuestionNode::new(
            "midpoint-5",
            "你會想嘗試極限運動嗎？",
            vec![end("當然想啊", Estp), Choice::next("才不要", 11)],
        ),
        QuestionNode::new(
            "midpoint-6",
            "透過大吼大叫讓大家遵守規則？",
            vec![end("沒錯", Estj), end("不太好吧", Istj)],
        ),
        QuestionNode::new(
            "midpoint-7",
            "你對婚前性行為怎麼看？",
            vec![end("不好吧", Isfj), Choice::next("可以接受", 12)],
        ),
        QuestionNode::new(
            "midpoint-8",
            "你自認感性嗎？",
            vec![end("是", Infj), Choice::next("不", 13)],
        ),
        QuestionNode::new(
            "midpoint-9",
            "你自認感性嗎？",
            vec![end("是", Infj), end("我時常哭天喊地", Infp)],
        ),
        QuestionNode::new(
            "midpoint-10",
            "你平日有點懶嗎？",
            vec![Choice::next("對啊", 15), end("沒這回事", Entj)],
        ),
        QuestionNode::new(
            "midpoint-11",
            "比較喜歡靜態還是動態的娛樂？",
            vec![end("靜態的", Isfp), end("動態的", Esfp)],
        ),
        QuestionNode::new(
            "midpoint-12",
            "你對學歷很看重嗎？",
            vec![end("學歷很重要", Enfj), end("沒那麼重要吧", Esfj)],
        ),
        QuestionNode::new(
            "midpoint-13",
            "你確定你真的一點點感性都沒有？",
            vec![end("對我就是鐵石心腸", Intj), Choice::next("這很複雜啦", 14)],
        ),
        QuestionNode::new(
            "midpoint-14",
            "你喜歡重型機械嗎？",
            vec![end("我超喜歡", Istp), end("還好", Infp)],
        ),
        QuestionNode::new(
            "midpoint-15",
            "你相信星座運勢嗎？",
            vec![end("那就是騙錢用的", Entp), end("多少會看一下", Enfp)],
        ),
    ])
}
