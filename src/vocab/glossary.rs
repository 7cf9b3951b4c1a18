/// Built-in English→Turkish glossary for the word modal. This is a study
/// aid, not a translation service: lookups are exact matches against the
/// extracted token.
const GLOSSARY: &[(&str, &str)] = &[
    ("usually", "genellikle"),
    ("breakfast", "kahvaltı"),
    ("before", "önce"),
    ("neighbor", "komşu"),
    ("barks", "havlar"),
    ("loudly", "yüksek sesle"),
    ("medicine", "ilaç"),
    ("twice", "iki kez"),
    ("told", "söyledi"),
    ("saving", "biriktirmek"),
    ("laptop", "dizüstü bilgisayar"),
    ("studies", "çalışmalar"),
    ("delayed", "gecikmek"),
    ("heavy rain", "şiddetli yağmur"),
    ("fluently", "akıcı bir şekilde"),
    ("translator", "çevirmen"),
    ("ordered", "sipariş etmek"),
    ("comedy", "komedi"),
    ("weekend", "hafta sonu"),
    ("comfortable", "rahat"),
    ("quite", "oldukça"),
    ("expensive", "pahalı"),
    ("forgot", "unutmak"),
    ("umbrella", "şemsiye"),
    ("completely wet", "tamamen ıslak"),
    ("closes", "kapatmak"),
    ("weekdays", "hafta içi"),
    ("sufficient", "yeterli"),
    ("advanced", "gelişmiş"),
    ("technology", "teknoloji"),
    ("equivalent", "eşdeğer"),
    ("magic", "sihir"),
    ("house", "ev"),
    ("divided", "bölünmüş"),
    ("against", "karşısında"),
    ("itself", "kendisi"),
    ("cannot", "yapamaz"),
    ("stand", "durmak"),
];

pub fn translate(word: &str) -> Option<&'static str> {
    GLOSSARY
        .iter()
        .find(|(english, _)| *english == word)
        .map(|(_, turkish)| *turkish)
}
